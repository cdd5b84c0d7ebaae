//! In-memory audio clips and the codecs used to move them in and out of bytes

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod clip;
mod error;
mod format;

pub use clip::AudioClip;
pub use error::{AudioError, Result};
pub use format::{AudioFormat, PCM_CHANNELS, PCM_SAMPLE_RATE};
