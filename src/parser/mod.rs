pub mod signature;

pub use signature::{AccessModifier, Argument, Signature};

use crate::error::{Error, Result};
use crate::splitter::Splitter;
use lazy_static::lazy_static;

/// Delimiters separating the tokens of a signature
pub const SIGNATURE_DELIMITERS: [&str; 4] = [" ", "(", ")", ","];

lazy_static! {
    static ref SIGNATURE_SPLITTER: Splitter = Splitter::new(SIGNATURE_DELIMITERS).unwrap();
}

/// Parse a method signature of the form
/// `[accessModifier] returnType methodName(argType1 argName1, ...)`.
///
/// The access modifier is recognised only when the first token is one of
/// `public`, `protected` or `private`; anything else is taken as the return
/// type.
pub fn parse_function(signature: &str) -> Result<Signature> {
    if signature.trim().is_empty() {
        return Err(Error::invalid_format(signature, "empty signature"));
    }

    let tokens = SIGNATURE_SPLITTER.split(signature);
    let mut cursor = Cursor::new(&tokens);

    let access_modifier = cursor
        .peek()
        .and_then(|token| token.parse::<AccessModifier>().ok());
    if access_modifier.is_some() {
        cursor.advance();
    }

    let return_type = cursor
        .next_token()
        .ok_or_else(|| Error::invalid_format(signature, "missing return type"))?;
    let method_name = cursor
        .next_token()
        .ok_or_else(|| Error::invalid_format(signature, "missing method name"))?;

    let arguments = parse_arguments(signature, cursor.rest())?;

    Ok(Signature {
        access_modifier,
        return_type: return_type.to_string(),
        method_name: method_name.to_string(),
        arguments,
    })
}

fn parse_arguments(signature: &str, tokens: &[String]) -> Result<Vec<Argument>> {
    let pairs = tokens.chunks_exact(2);
    if let [dangling] = pairs.remainder() {
        return Err(Error::invalid_format(
            signature,
            format!("argument type '{}' has no name", dangling),
        ));
    }

    Ok(pairs
        .map(|pair| Argument::new(&pair[0], &pair[1]))
        .collect())
}

struct Cursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.advance();
        Some(token)
    }

    fn rest(&self) -> &'a [String] {
        &self.tokens[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_with_modifier() {
        let sig = parse_function("public void log(String value)").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Public));
        assert_eq!(sig.return_type(), "void");
        assert_eq!(sig.method_name(), "log");
        assert_eq!(sig.arguments(), &[Argument::new("String", "value")]);
    }

    #[test]
    fn test_parse_without_modifier() {
        let sig = parse_function("Vector3 distort(int x, int y, int z, float magnitude)").unwrap();
        assert_eq!(sig.access_modifier(), None);
        assert_eq!(sig.return_type(), "Vector3");
        assert_eq!(sig.method_name(), "distort");
        assert_eq!(
            sig.arguments(),
            &[
                Argument::new("int", "x"),
                Argument::new("int", "y"),
                Argument::new("int", "z"),
                Argument::new("float", "magnitude"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_arguments() {
        let sig = parse_function("public DateTime getCurrentDateTime()").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Public));
        assert_eq!(sig.return_type(), "DateTime");
        assert_eq!(sig.method_name(), "getCurrentDateTime");
        assert!(sig.arguments().is_empty());
    }

    #[test]
    fn test_parse_protected_and_private() {
        let sig = parse_function("protected int count()").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Protected));

        let sig = parse_function("private void log(String value)").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Private));
    }

    #[test]
    fn test_extra_whitespace() {
        let sig = parse_function("  public   void  log (String   value ,int  level )  ").unwrap();
        assert_eq!(sig.method_name(), "log");
        assert_eq!(
            sig.arguments(),
            &[Argument::new("String", "value"), Argument::new("int", "level")]
        );
    }

    #[test]
    fn test_modifier_like_return_type_is_not_modifier() {
        let sig = parse_function("Public run()").unwrap();
        assert_eq!(sig.access_modifier(), None);
        assert_eq!(sig.return_type(), "Public");
        assert_eq!(sig.method_name(), "run");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_function("").unwrap_err().is_invalid_format());
        assert!(parse_function("   ").unwrap_err().is_invalid_format());
        assert!(parse_function("(,)").unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_missing_fields() {
        let err = parse_function("public").unwrap_err();
        assert_eq!(err, Error::invalid_format("public", "missing return type"));

        let err = parse_function("public void").unwrap_err();
        assert_eq!(err, Error::invalid_format("public void", "missing method name"));

        let err = parse_function("void()").unwrap_err();
        assert_eq!(err, Error::invalid_format("void()", "missing method name"));
    }

    #[test]
    fn test_odd_argument_tokens() {
        let err = parse_function("void broken(int)").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_format("void broken(int)", "argument type 'int' has no name")
        );

        assert!(parse_function("void broken(int a, float)").is_err());
    }

    #[test]
    fn test_from_str() {
        let sig: Signature = "void run()".parse().unwrap();
        assert_eq!(sig, Signature::new("void", "run"));
    }

    fn ident() -> impl Strategy<Value = String> {
        "[A-Za-z_][A-Za-z0-9_]{0,8}"
    }

    fn signature() -> impl Strategy<Value = Signature> {
        (
            proptest::option::of(proptest::sample::select(AccessModifier::ALL.to_vec())),
            ident(),
            ident(),
            proptest::collection::vec((ident(), ident()), 0..5),
        )
            .prop_filter("return type must not look like a modifier", |(_, ret, _, _)| {
                ret.parse::<AccessModifier>().is_err()
            })
            .prop_map(|(modifier, ret, name, args)| {
                let mut sig = Signature::new(&ret, &name);
                sig.access_modifier = modifier;
                for (arg_type, arg_name) in args {
                    sig = sig.with_argument(&arg_type, &arg_name);
                }
                sig
            })
    }

    proptest! {
        #[test]
        fn prop_reparse_is_identity(sig in signature()) {
            let reparsed = parse_function(&sig.to_string()).unwrap();
            prop_assert_eq!(reparsed, sig);
        }
    }
}
