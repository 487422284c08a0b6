use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Bank display name (as reported by the provider) to support mailbox
    static ref SUPPORT_EMAILS: HashMap<&'static str, &'static str> = HashMap::from([
        ("State Bank of India", "customercare@sbi.co.in"),
        ("HDFC Bank", "support@hdfcbank.com"),
        ("ICICI Bank", "customer.care@icicibank.com"),
        ("Axis Bank", "customer.service@axisbank.com"),
        ("Bank of Baroda", "customercare@bankofbaroda.com"),
        ("Punjab National Bank", "customercare@pnb.co.in"),
        ("Canara Bank", "customercare@canarabank.com"),
        ("Union Bank of India", "customercare@unionbankofindia.com"),
        ("Bank of India", "customercare@bankofindia.co.in"),
        ("IDBI Bank", "customercare@idbi.co.in"),
        ("Indian Bank", "customercare@indianbank.co.in"),
        ("Central Bank of India", "customercare@centralbank.co.in"),
    ]);
}

/// Support email for a bank name. Exact, case-sensitive match only.
pub fn support_email_for(bank_name: &str) -> Option<&'static str> {
    SUPPORT_EMAILS.get(bank_name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bank() {
        assert_eq!(support_email_for("HDFC Bank"), Some("support@hdfcbank.com"));
        assert_eq!(
            support_email_for("State Bank of India"),
            Some("customercare@sbi.co.in")
        );
    }

    #[test]
    fn test_unknown_bank() {
        assert_eq!(support_email_for("Kotak Mahindra Bank"), None);
        assert_eq!(support_email_for(""), None);
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(support_email_for("hdfc bank"), None);
        assert_eq!(support_email_for("HDFC Bank "), None);
        assert_eq!(support_email_for("HDFC"), None);
    }

    #[test]
    fn test_directory_size() {
        assert_eq!(SUPPORT_EMAILS.len(), 12);
    }
}
