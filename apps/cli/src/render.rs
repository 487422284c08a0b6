//! Plain-text rendering of lookup results.

use std::fmt::Write;

use ifsc_finder_core::lookup::BranchDetails;

const NOT_APPLICABLE: &str = "N/A";

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_APPLICABLE,
    }
}

pub fn render_details(details: &BranchDetails) -> String {
    let record = &details.branch;
    let methods = if details.payment_methods.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        details
            .payment_methods
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let rows = [
        ("Bank", or_na(Some(&record.bank))),
        ("IFSC", or_na(Some(&record.ifsc))),
        ("Branch", or_na(Some(&record.branch))),
        ("Address", or_na(Some(&record.address))),
        ("City", or_na(Some(&record.city))),
        ("District", or_na(Some(&record.district))),
        ("State", or_na(Some(&record.state))),
        ("MICR", or_na(record.micr.as_deref())),
        ("Contact", or_na(record.contact.as_deref())),
        ("Support", or_na(details.support_email.as_deref())),
        ("Payments", methods.as_str()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<10}{}", format!("{}:", label), value);
    }
    out
}
