use std::fmt;

use serde::{Deserialize, Serialize};

/// Interbank payment systems a branch may support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Neft,
    Rtgs,
    Imps,
    Upi,
}

impl PaymentMethod {
    /// Display order used for badges and the spoken summary.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Neft,
        PaymentMethod::Rtgs,
        PaymentMethod::Imps,
        PaymentMethod::Upi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Neft => "NEFT",
            PaymentMethod::Rtgs => "RTGS",
            PaymentMethod::Imps => "IMPS",
            PaymentMethod::Upi => "UPI",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical branch metadata returned by a successful lookup.
///
/// Built fresh for every lookup and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRecord {
    pub bank: String,
    pub ifsc: String,
    pub branch: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,

    /// Cheque-processing code, absent when the provider has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    pub upi: bool,
    pub rtgs: bool,
    pub neft: bool,
    pub imps: bool,
}

impl BranchRecord {
    pub fn supports(&self, method: PaymentMethod) -> bool {
        match method {
            PaymentMethod::Neft => self.neft,
            PaymentMethod::Rtgs => self.rtgs,
            PaymentMethod::Imps => self.imps,
            PaymentMethod::Upi => self.upi,
        }
    }

    /// Supported payment methods in NEFT, RTGS, IMPS, UPI order.
    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        PaymentMethod::ALL
            .into_iter()
            .filter(|method| self.supports(*method))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BranchRecord {
        BranchRecord {
            bank: "HDFC Bank".to_string(),
            ifsc: "HDFC0000053".to_string(),
            branch: "Ahmedabad - Ashram Road".to_string(),
            address: "Ashram Road, Ahmedabad".to_string(),
            city: "Ahmedabad".to_string(),
            district: "Ahmedabad".to_string(),
            state: "Gujarat".to_string(),
            micr: None,
            contact: None,
            upi: true,
            rtgs: false,
            neft: true,
            imps: false,
        }
    }

    #[test]
    fn test_payment_methods_follow_badge_order() {
        let mut branch = record();
        assert_eq!(
            branch.payment_methods(),
            vec![PaymentMethod::Neft, PaymentMethod::Upi]
        );

        branch.rtgs = true;
        branch.imps = true;
        assert_eq!(branch.payment_methods(), PaymentMethod::ALL.to_vec());
    }

    #[test]
    fn test_serializes_camel_case_without_absent_optionals() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["bank"], "HDFC Bank");
        assert_eq!(json["ifsc"], "HDFC0000053");
        assert!(json.get("micr").is_none());
        assert!(json.get("contact").is_none());
        assert_eq!(json["neft"], true);
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::Neft.to_string(), "NEFT");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Upi).unwrap(),
            "\"UPI\""
        );
    }
}
