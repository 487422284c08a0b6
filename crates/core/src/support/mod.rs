//! Customer-support contact directory.

mod support_email;

pub use support_email::support_email_for;
