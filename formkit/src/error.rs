use thiserror::Error;

/// Failure to apply a declarative string attribute to an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("unknown attribute '{0}'")]
    Unknown(String),

    #[error("attribute '{name}' expects a non-negative integer, got {value:?}")]
    InvalidNumber { name: String, value: String },

    #[error(transparent)]
    InvalidKeyword(#[from] formdom::ParseError),
}
