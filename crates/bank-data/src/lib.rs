//! IFSC Finder Bank Data Crate
//!
//! Provider-agnostic access to Indian bank branch metadata keyed by IFSC code.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |   IFSC code      | --> |    Provider      | --> |  raw JSON body   |
//! +------------------+     +------------------+     +------------------+
//!                                                            |
//!                                                            v
//!                                                   +------------------+
//!                                                   |   Normalizer     |
//!                                                   +------------------+
//!                                                            |
//!                                                            v
//!                                                   +------------------+
//!                                                   |  BranchRecord    |
//!                                                   +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`BranchRecord`] - Canonical branch metadata
//! - [`PaymentMethod`] - Interbank payment systems a branch can support
//! - [`CapabilityPolicy`] - How provider payment flags are interpreted
//! - [`BankDataProvider`] - Trait implemented by every data source

pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;

pub use errors::BankDataError;
pub use models::{BankSearchParams, BranchRecord, PaymentMethod};
pub use normalize::{normalize_branch, CapabilityPolicy};
pub use provider::razorpay::RazorpayProvider;
pub use provider::BankDataProvider;
