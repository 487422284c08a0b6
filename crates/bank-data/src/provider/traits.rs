use async_trait::async_trait;

use crate::errors::BankDataError;
use crate::models::BranchRecord;

/// Trait for branch metadata providers.
///
/// Implement this to add a new data source. A provider issues a single
/// request per call and never retries.
#[async_trait]
pub trait BankDataProvider: Send + Sync {
    /// Constant identifier such as "RAZORPAY", used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch branch metadata for an IFSC code.
    ///
    /// # Arguments
    ///
    /// * `ifsc` - A code that already passed format validation
    async fn get_branch(&self, ifsc: &str) -> Result<BranchRecord, BankDataError>;
}
