use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::ValidationError;

use super::validate_ifsc;

/// An IFSC code that passed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfscCode(String);

impl IfscCode {
    /// Parses an already-uppercased code.
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        if validate_ifsc(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(ValidationError::InvalidFormat(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First four characters identify the bank.
    pub fn bank_code(&self) -> &str {
        &self.0[..4]
    }

    /// Last six characters identify the branch.
    pub fn branch_code(&self) -> &str {
        &self.0[5..]
    }
}

impl fmt::Display for IfscCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IfscCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for IfscCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
