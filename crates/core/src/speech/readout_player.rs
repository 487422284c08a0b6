use std::sync::Arc;

use ifsc_finder_bank_data::BranchRecord;
use log::{debug, warn};

use super::readout::{select_voice, utterance_for};
use super::speech_model::{Utterance, Voice};
use super::speech_traits::SpeechEngine;
use crate::errors::Result;

/// Voice readout state for one view.
///
/// The voice is resolved once at construction. Playback is skipped when
/// there is no engine, audio is disabled, or no voice was resolved.
pub struct ReadoutPlayer {
    engine: Option<Arc<dyn SpeechEngine>>,
    enabled: bool,
    voice: Option<Voice>,
    current: Option<Utterance>,
}

impl ReadoutPlayer {
    pub fn new(engine: Option<Arc<dyn SpeechEngine>>) -> Self {
        let voice = engine.as_ref().and_then(|engine| match engine.voices() {
            Ok(voices) => select_voice(&voices),
            Err(e) => {
                warn!("Speech voices unavailable: {}", e);
                None
            }
        });
        if let Some(voice) = &voice {
            debug!("Selected speech voice: {}", voice.name);
        }

        Self {
            engine,
            enabled: true,
            voice,
            current: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the audio preference, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }

    pub fn current_utterance(&self) -> Option<&Utterance> {
        self.current.as_ref()
    }

    /// Replay is offered only while audio is on and something was read.
    pub fn can_replay(&self) -> bool {
        self.enabled && self.current.is_some()
    }

    fn ready_engine(&self) -> Option<&Arc<dyn SpeechEngine>> {
        if !self.enabled || self.voice.is_none() {
            return None;
        }
        self.engine.as_ref()
    }

    /// Speak the record. Returns false when playback was skipped.
    pub fn read(&mut self, record: &BranchRecord) -> Result<bool> {
        let Some(engine) = self.ready_engine().cloned() else {
            return Ok(false);
        };

        let utterance = utterance_for(record, self.voice.clone());
        engine.cancel()?;
        engine.speak(&utterance)?;
        self.current = Some(utterance);
        Ok(true)
    }

    /// Re-issue the last utterance. Returns false when playback was skipped.
    pub fn replay(&mut self) -> Result<bool> {
        let Some(engine) = self.ready_engine() else {
            return Ok(false);
        };
        let Some(utterance) = self.current.as_ref() else {
            return Ok(false);
        };

        engine.cancel()?;
        engine.speak(utterance)?;
        Ok(true)
    }
}
