use thiserror::Error;

/// Errors raised while building, parsing or copying style descriptors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Style '{0}' cannot be copied")]
    NotCopyable(String),
}
