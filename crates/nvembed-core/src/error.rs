//! Error types shared across the conversion crates.

/// Error parsing the serialized `"w:h"` ratio form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ratio must be of the form <digits>:<digits> with positive parts")]
pub struct ParseRatioError;

/// Error during markup parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
