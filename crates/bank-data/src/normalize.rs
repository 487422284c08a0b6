//! Normalization of provider response bodies into [`BranchRecord`].
//!
//! Providers disagree on key casing (`BANK` vs `bank`) and on how payment
//! capabilities are reported. Field values are taken with JavaScript-style
//! truthiness: an empty string, `0`, `false` or `null` counts as missing and
//! falls through to the lower-case key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::BranchRecord;

/// How the UPI/RTGS/NEFT/IMPS flags of a provider body are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityPolicy {
    /// A falsy provider flag is reported as supported. This mirrors the
    /// published front-end, which could never show a method as unsupported.
    /// Likely a defect upstream; kept as the default for parity.
    #[default]
    Optimistic,

    /// Provider flags are reported as given; missing means unsupported.
    Reported,
}

impl CapabilityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityPolicy::Optimistic => "optimistic",
            CapabilityPolicy::Reported => "reported",
        }
    }

    fn resolve(&self, body: &Map<String, Value>, upper: &str, lower: &str) -> bool {
        match self {
            CapabilityPolicy::Optimistic => true,
            CapabilityPolicy::Reported => pick(body, upper, lower).is_some(),
        }
    }
}

impl fmt::Display for CapabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(CapabilityPolicy::Optimistic),
            "reported" => Ok(CapabilityPolicy::Reported),
            other => Err(format!("unknown capability policy: {}", other)),
        }
    }
}

/// Build a [`BranchRecord`] from a provider JSON object.
///
/// Required text fields that are missing under both casings become empty
/// strings; the record is otherwise trusted as-is.
pub fn normalize_branch(body: &Map<String, Value>, policy: CapabilityPolicy) -> BranchRecord {
    BranchRecord {
        bank: text(body, "BANK", "bank").unwrap_or_default(),
        ifsc: text(body, "IFSC", "ifsc").unwrap_or_default(),
        branch: text(body, "BRANCH", "branch").unwrap_or_default(),
        address: text(body, "ADDRESS", "address").unwrap_or_default(),
        city: text(body, "CITY", "city").unwrap_or_default(),
        district: text(body, "DISTRICT", "district").unwrap_or_default(),
        state: text(body, "STATE", "state").unwrap_or_default(),
        micr: text(body, "MICR", "micr"),
        contact: text(body, "CONTACT", "contact"),
        upi: policy.resolve(body, "UPI", "upi"),
        rtgs: policy.resolve(body, "RTGS", "rtgs"),
        neft: policy.resolve(body, "NEFT", "neft"),
        imps: policy.resolve(body, "IMPS", "imps"),
    }
}

/// First truthy value under `upper`, then `lower`.
fn pick<'a>(body: &'a Map<String, Value>, upper: &str, lower: &str) -> Option<&'a Value> {
    body.get(upper)
        .filter(|v| is_truthy(v))
        .or_else(|| body.get(lower).filter(|v| is_truthy(v)))
}

fn text(body: &Map<String, Value>, upper: &str, lower: &str) -> Option<String> {
    pick(body, upper, lower).map(|value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
