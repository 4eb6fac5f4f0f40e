//! Validation for the embed properties form.
//!
//! Fields arrive as the raw strings the user typed; each check is
//! independent so the UI can flag every bad field at once.

use nvembed_core::{Ratio, is_url, parse_dimension};

/// Raw form input.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub src: String,
    pub width: String,
    pub height: String,
    pub ratio: String,
}

/// One invalid field, with a message suitable for display next to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("source must be a URL")]
    Src,
    #[error("width must be a whole number between 1 and 9999")]
    Width,
    #[error("height must be a whole number between 1 and 9999")]
    Height,
    #[error("ratio must be two positive numbers separated by a colon")]
    Ratio,
}

/// Check every field, returning all failures.
pub fn validate_form(form: &FormData) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_url(form.src.trim()) {
        errors.push(FieldError::Src);
    }
    if parse_dimension(&form.width).is_none() {
        errors.push(FieldError::Width);
    }
    if parse_dimension(&form.height).is_none() {
        errors.push(FieldError::Height);
    }
    if form.ratio.trim().parse::<Ratio>().is_err() {
        errors.push(FieldError::Ratio);
    }
    errors
}
