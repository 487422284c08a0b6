//! Error types for the bank data crate.

use thiserror::Error;

/// Errors that can occur while fetching branch metadata from a provider.
///
/// None of these are retried. Callers in the lookup layer log them and
/// collapse every variant into an absent result.
#[derive(Error, Debug)]
pub enum BankDataError {
    /// The provider does not know the requested IFSC code (HTTP 404).
    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// Transport failure or a non-success status other than 404.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// The provider answered with a body that is not a JSON object.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the body
        provider: String,
        /// Parse failure details
        message: String,
    },
}

impl BankDataError {
    /// Whether the provider positively reported the code as unknown.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BranchNotFound(_))
    }
}
