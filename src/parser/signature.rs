use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Protected,
    Private,
}

impl AccessModifier {
    pub const ALL: [AccessModifier; 3] = [
        AccessModifier::Public,
        AccessModifier::Protected,
        AccessModifier::Private,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            AccessModifier::Private => "private",
        }
    }
}

impl FromStr for AccessModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessModifier::Public),
            "protected" => Ok(AccessModifier::Protected),
            "private" => Ok(AccessModifier::Private),
            _ => Err(format!("Unknown access modifier: {}", s)),
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub arg_type: String,
    pub name: String,
}

impl Argument {
    pub fn new(arg_type: &str, name: &str) -> Self {
        Self {
            arg_type: arg_type.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arg_type, self.name)
    }
}

/// Parsed fields of a method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub access_modifier: Option<AccessModifier>,
    pub return_type: String,
    pub method_name: String,
    pub arguments: Vec<Argument>,
}

impl Signature {
    pub fn new(return_type: &str, method_name: &str) -> Self {
        Self {
            access_modifier: None,
            return_type: return_type.to_string(),
            method_name: method_name.to_string(),
            arguments: Vec::new(),
        }
    }

    pub fn with_access_modifier(mut self, modifier: AccessModifier) -> Self {
        self.access_modifier = Some(modifier);
        self
    }

    pub fn with_argument(mut self, arg_type: &str, name: &str) -> Self {
        self.arguments.push(Argument::new(arg_type, name));
        self
    }

    pub fn access_modifier(&self) -> Option<AccessModifier> {
        self.access_modifier
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

/// Recomposes `[modifier ]returnType name(type1 name1, type2 name2)`
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = self.access_modifier {
            write!(f, "{} ", modifier)?;
        }
        write!(f, "{} {}(", self.return_type, self.method_name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

impl FromStr for Signature {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_function(s)
    }
}
