//! IFSC module - code format validation and the validated code type.

mod ifsc_model;
mod ifsc_validation;

pub use ifsc_model::IfscCode;
pub use ifsc_validation::{check_submission, format_warning, normalize_input, validate_ifsc};
