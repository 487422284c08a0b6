use std::sync::Arc;

use async_trait::async_trait;
use ifsc_finder_bank_data::{BankDataProvider, BranchRecord};
use log::{debug, warn};

use super::lookup_traits::LookupServiceTrait;
use crate::errors::Result;
use crate::ifsc::{check_submission, IfscCode};

/// Lookup service backed by a single bank data provider.
pub struct LookupService {
    provider: Arc<dyn BankDataProvider>,
}

impl LookupService {
    pub fn new(provider: Arc<dyn BankDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }
}

#[async_trait]
impl LookupServiceTrait for LookupService {
    async fn fetch_branch(&self, code: &IfscCode) -> Option<BranchRecord> {
        debug!("Looking up {} via {}", code, self.provider.id());
        match self.provider.get_branch(code.as_str()).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Error fetching bank details for {}: {}", code, e);
                None
            }
        }
    }

    async fn lookup(&self, code: &str) -> Result<Option<BranchRecord>> {
        let code = check_submission(code)?;
        Ok(self.fetch_branch(&code).await)
    }
}
