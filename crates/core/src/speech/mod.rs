//! Speech module - spoken summary of a branch record.
//!
//! The text is assembled here; playback goes through a [`SpeechEngine`]
//! supplied by the front-end (a TTS process, a browser bridge, ...).

mod readout;
mod readout_player;
mod speech_model;
mod speech_traits;

pub use readout::{compose_readout, select_voice, utterance_for};
pub use readout_player::ReadoutPlayer;
pub use speech_model::{Utterance, Voice, SPEECH_PITCH, SPEECH_RATE, SPEECH_VOLUME};
pub use speech_traits::SpeechEngine;
