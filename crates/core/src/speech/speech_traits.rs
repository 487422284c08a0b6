use crate::errors::SpeechError;

use super::speech_model::{Utterance, Voice};

/// Platform text-to-speech capability.
///
/// `speak` is fire-and-forget: it queues the utterance and returns without
/// waiting for playback to finish.
pub trait SpeechEngine: Send + Sync {
    fn voices(&self) -> Result<Vec<Voice>, SpeechError>;

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Stop anything currently playing or queued.
    fn cancel(&self) -> Result<(), SpeechError>;
}
