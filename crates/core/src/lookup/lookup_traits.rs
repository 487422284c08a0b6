use async_trait::async_trait;
use ifsc_finder_bank_data::BranchRecord;

use crate::errors::Result;
use crate::ifsc::IfscCode;

/// Trait defining the contract for branch lookups.
#[async_trait]
pub trait LookupServiceTrait: Send + Sync {
    /// Fetch branch metadata for a validated code.
    ///
    /// Provider, transport and parse failures are logged and reported as
    /// `None`; callers must check for absence explicitly.
    async fn fetch_branch(&self, code: &IfscCode) -> Option<BranchRecord>;

    /// Validate `code` and fetch it.
    ///
    /// Returns a validation error without issuing a request when `code` is
    /// empty or malformed. `code` is expected to be uppercased already.
    async fn lookup(&self, code: &str) -> Result<Option<BranchRecord>>;
}
