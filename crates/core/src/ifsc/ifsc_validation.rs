use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::FORMAT_WARNING_MESSAGE;
use crate::errors::ValidationError;

use super::IfscCode;

lazy_static! {
    /// Four bank letters, a literal zero, six branch characters
    static ref IFSC_REGEX: Regex =
        Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("Invalid regex pattern");
}

/// Returns whether `code` has the IFSC shape. Case-sensitive.
pub fn validate_ifsc(code: &str) -> bool {
    IFSC_REGEX.is_match(code)
}

/// Live keystroke transform: trims and uppercases.
pub fn normalize_input(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Advisory text for a malformed, non-empty code. Never gates a request.
pub fn format_warning(code: &str) -> Option<&'static str> {
    if code.is_empty() || validate_ifsc(code) {
        None
    } else {
        Some(FORMAT_WARNING_MESSAGE)
    }
}

/// Gate applied on submit, before any request is issued.
pub fn check_submission(code: &str) -> Result<IfscCode, ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::Empty);
    }
    IfscCode::parse(code)
}
