use ifsc_finder_bank_data::BranchRecord;

use super::speech_model::{Utterance, Voice, SPEECH_PITCH, SPEECH_RATE, SPEECH_VOLUME};
use crate::constants::NOT_AVAILABLE;
use crate::support::support_email_for;

const VOICE_HINTS: [&str; 3] = ["female", "woman", "girl"];

/// Multi-line spoken summary of a branch.
pub fn compose_readout(record: &BranchRecord) -> String {
    let methods = record
        .payment_methods()
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    [
        format!("Bank: {}", record.bank),
        format!("Branch: {}", record.branch),
        format!("IFSC Code: {}", record.ifsc),
        format!("MICR: {}", record.micr.as_deref().unwrap_or(NOT_AVAILABLE)),
        format!("City: {}", record.city),
        format!("District: {}", record.district),
        format!("State: {}", record.state),
        format!("Address: {}", record.address),
        format!(
            "Contact: {}",
            record.contact.as_deref().unwrap_or(NOT_AVAILABLE)
        ),
        format!(
            "Customer Support Email: {}",
            support_email_for(&record.bank).unwrap_or(NOT_AVAILABLE)
        ),
        format!("Payment Methods: {}", methods),
    ]
    .join("\n")
}

/// Utterance with the fixed rate, pitch and volume.
pub fn utterance_for(record: &BranchRecord, voice: Option<Voice>) -> Utterance {
    Utterance {
        text: compose_readout(record),
        rate: SPEECH_RATE,
        pitch: SPEECH_PITCH,
        volume: SPEECH_VOLUME,
        voice,
    }
}

/// Prefer a voice whose name hints at a female speaker, else the first one.
pub fn select_voice(voices: &[Voice]) -> Option<Voice> {
    voices
        .iter()
        .find(|voice| {
            let name = voice.name.to_lowercase();
            VOICE_HINTS.iter().any(|hint| name.contains(hint))
        })
        .or_else(|| voices.first())
        .cloned()
}
