//! Dialogue-to-podcast pipeline
//!
//! Raw two-speaker dialogue is parsed into attributed lines, each line is
//! normalized and synthesized with its speaker's voice, and the clips are
//! joined with fixed pauses into a single exported audio file.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod generator;
mod markers;
mod normalizer;
mod output;
mod parser;
mod request;
mod response;

pub use error::{GenerationError, ParseError, ValidationError};
pub use generator::{EXPORT_FORMAT, LINE_PAUSE, PodcastGenerator};
pub use markers::SpeechMarkers;
pub use normalizer::TextNormalizer;
pub use output::{output_filename, sanitize_title};
pub use parser::{DialogueParser, SpeakerLine};
pub use request::{MAX_TITLE_CHARS, MIN_DIALOGUE_CHARS, PodcastRequest};
pub use response::{AudioArtifact, PodcastError, PodcastResponse};
