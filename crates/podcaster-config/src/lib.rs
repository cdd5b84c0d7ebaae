#![allow(clippy::must_use_candidate)]

mod loader;
pub mod voice;

use std::path::PathBuf;

use secrecy::SecretString;

pub use voice::Voice;

/// Default text-to-speech model
pub const DEFAULT_TTS_MODEL: &str = "tts-1";
/// Default text-generation model reported alongside generated podcasts
pub const DEFAULT_GPT_MODEL: &str = "gpt-4o-mini";
/// Default target podcast length in minutes
pub const DEFAULT_PODCAST_LENGTH: u32 = 10;
/// Accepted range for podcast lengths, in minutes
pub const PODCAST_LENGTH_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// Process-wide podcast server configuration
///
/// Built once at startup and shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the speech synthesis service
    pub openai_api_key: SecretString,
    /// Base URL override for the speech synthesis service
    pub openai_base_url: Option<String>,
    /// Speech synthesis model id
    pub tts_model: String,
    /// Text-generation model id, reported in responses
    pub gpt_model: String,
    pub speaker1_name: String,
    pub speaker2_name: String,
    pub speaker1_voice: Voice,
    pub speaker2_voice: Voice,
    /// Target length used when a request does not name one
    pub default_podcast_length: u32,
    /// Directory receiving exported podcast files
    pub output_directory: PathBuf,
}

impl Config {
    /// Human-readable label for both speakers, e.g. `Alex and Jordan`
    pub fn speakers_label(&self) -> String {
        format!("{} and {}", self.speaker1_name, self.speaker2_name)
    }

    /// Voice bound to a speaker
    ///
    /// Anything other than speaker one is voiced as speaker two.
    pub fn voice_for(&self, speaker: &str) -> Voice {
        if speaker == self.speaker1_name {
            self.speaker1_voice
        } else {
            self.speaker2_voice
        }
    }
}
