use serde::{Deserialize, Serialize};

pub use ifsc_finder_core::lookup::BranchDetails;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeValidation {
    pub code: String,
    pub valid: bool,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub capability_policy: String,
}
