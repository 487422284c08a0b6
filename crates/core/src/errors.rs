//! Core error types for IFSC Finder.
//!
//! Provider failures never appear here: the lookup service logs them and
//! reports an absent result instead.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Speech playback failed: {0}")]
    Speech(#[from] SpeechError),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Rejections raised before any request is issued.
///
/// The display text is what the user sees inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter an IFSC code")]
    Empty,

    #[error("Please enter a valid IFSC code")]
    InvalidFormat(String),
}

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Speech engine unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to list voices: {0}")]
    Voices(String),

    #[error("Failed to speak utterance: {0}")]
    Playback(String),
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No branch details to copy")]
    NothingToCopy,

    #[error("{0}")]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter an IFSC code");
        assert_eq!(
            ValidationError::InvalidFormat("ABCD1234567".to_string()).to_string(),
            "Please enter a valid IFSC code"
        );

        let err: Error = ValidationError::Empty.into();
        assert_eq!(err.to_string(), "Please enter an IFSC code");
    }
}
