//! IFSC Finder Core - validation, lookup workflow and presentation helpers.
//!
//! This crate holds the front-end logic of the IFSC resolver. It is
//! provider-agnostic and talks to branch data sources through the
//! `BankDataProvider` trait from the `bank-data` crate.

pub mod clipboard;
pub mod constants;
pub mod errors;
pub mod ifsc;
pub mod lookup;
pub mod speech;
pub mod support;

pub use ifsc_finder_bank_data::{BankSearchParams, BranchRecord, PaymentMethod};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
