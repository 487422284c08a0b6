//! Bank data models
//!
//! - `branch` - Canonical branch record (BranchRecord) and PaymentMethod enum
//! - `search` - Multi-field search parameters (BankSearchParams)

mod branch;
mod search;

pub use branch::{BranchRecord, PaymentMethod};
pub use search::BankSearchParams;
