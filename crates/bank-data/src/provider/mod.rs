//! Bank data provider abstraction and implementations.
//!
//! Providers receive an already validated IFSC code and return a normalized
//! [`BranchRecord`](crate::models::BranchRecord). Format validation happens
//! upstream in the lookup layer, not here.

mod traits;

pub mod razorpay;

pub use traits::BankDataProvider;
