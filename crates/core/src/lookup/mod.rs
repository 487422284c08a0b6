//! Lookup module - the single-field IFSC workflow.

mod lookup_form;
mod lookup_model;
mod lookup_service;
mod lookup_traits;


pub use lookup_form::{LookupForm, LookupTicket};
pub use lookup_model::BranchDetails;
pub use lookup_service::LookupService;
pub use lookup_traits::LookupServiceTrait;
