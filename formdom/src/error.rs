use thiserror::Error;

/// An enumerated attribute received a keyword it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} keyword: {value:?}")]
pub struct ParseError {
    /// Which enumeration was being parsed (`"input type"`, `"inputmode"`, ...).
    pub kind: &'static str,
    /// The rejected keyword.
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
