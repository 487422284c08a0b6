//! Speech engine backed by an espeak-ng compatible command.

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use ifsc_finder_core::errors::SpeechError;
use ifsc_finder_core::speech::{SpeechEngine, Utterance, Voice};

/// espeak-ng defaults the rate/pitch/volume multipliers are applied to
const BASE_WORDS_PER_MINUTE: f32 = 175.0;
const BASE_PITCH: f32 = 50.0;
const BASE_AMPLITUDE: f32 = 100.0;

pub struct CommandSpeechEngine {
    program: String,
    playing: Mutex<Option<Child>>,
}

impl CommandSpeechEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            playing: Mutex::new(None),
        }
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let output = Command::new(&self.program)
            .arg("--voices")
            .stderr(Stdio::null())
            .output()
            .map_err(|e| SpeechError::Unavailable(format!("{}: {}", self.program, e)))?;
        if !output.status.success() {
            return Err(SpeechError::Voices(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }
        Ok(parse_voices(&String::from_utf8_lossy(&output.stdout)))
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let child = Command::new(&self.program)
            .args(speak_args(utterance))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::Playback(format!("{}: {}", self.program, e)))?;

        let mut playing = self
            .playing
            .lock()
            .map_err(|_| SpeechError::Playback("speech state poisoned".to_string()))?;
        *playing = Some(child);
        Ok(())
    }

    fn cancel(&self) -> Result<(), SpeechError> {
        let mut playing = self
            .playing
            .lock()
            .map_err(|_| SpeechError::Playback("speech state poisoned".to_string()))?;
        if let Some(mut child) = playing.take() {
            // Already-finished children make kill fail; that is fine
            let _ = child.kill();
            let _ = child.wait();
        }
        Ok(())
    }
}

/// Parse `espeak-ng --voices` output.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  en-gb           --/M      English_(Great_Britain) gmw/en
///  5  en-us           --/F      English_(America)  gmw/en-US
/// ```
///
/// The gender marker is folded into the voice name so female voices can be
/// recognised by name; the language code is what `-v` expects.
pub fn parse_voices(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut columns = line.split_whitespace();
            let _priority = columns.next()?;
            let language = columns.next()?;
            let age_gender = columns.next()?;
            let name = columns.next()?.replace('_', " ");
            let name = match age_gender.rsplit('/').next() {
                Some("F") => format!("{} Female", name),
                Some("M") => format!("{} Male", name),
                _ => name,
            };
            Some(Voice {
                name,
                language: Some(language.to_string()),
            })
        })
        .collect()
}

pub fn speak_args(utterance: &Utterance) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(voice) = &utterance.voice {
        args.push("-v".to_string());
        args.push(voice.language.clone().unwrap_or_else(|| voice.name.clone()));
    }
    let words_per_minute = (BASE_WORDS_PER_MINUTE * utterance.rate).round() as u32;
    let pitch = (BASE_PITCH * utterance.pitch).round().clamp(0.0, 99.0) as u32;
    let amplitude = (BASE_AMPLITUDE * utterance.volume).round().clamp(0.0, 200.0) as u32;
    args.extend([
        "-s".to_string(),
        words_per_minute.to_string(),
        "-p".to_string(),
        pitch.to_string(),
        "-a".to_string(),
        amplitude.to_string(),
        "--".to_string(),
        utterance.text.clone(),
    ]);
    args
}
