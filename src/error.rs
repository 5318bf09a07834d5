use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Inputs to the splitter cannot be used
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Signature does not decompose into the expected token shape
    #[error("invalid signature '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },
}

impl Error {
    pub fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. })
    }
}
