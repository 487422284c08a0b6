use ifsc_finder_bank_data::{BranchRecord, PaymentMethod};
use serde::{Deserialize, Serialize};

use crate::support::support_email_for;

/// Branch record plus the derived fields a front-end renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDetails {
    pub branch: BranchRecord,
    pub support_email: Option<String>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl From<BranchRecord> for BranchDetails {
    fn from(branch: BranchRecord) -> Self {
        let support_email = support_email_for(&branch.bank).map(str::to_string);
        let payment_methods = branch.payment_methods();
        Self {
            branch,
            support_email,
            payment_methods,
        }
    }
}
