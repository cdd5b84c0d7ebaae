use std::path::{Path, PathBuf};
use std::time::Duration;

use jiff::civil::DateTime;
use podcaster_config::Config;
use serde::{Deserialize, Serialize};

use crate::{error::GenerationError, request::PodcastRequest};

/// Error type reported for failures during generation
pub const GENERATION_ERROR: &str = "generation_error";
/// Error type reported for rejected request fields
pub const VALIDATION_ERROR: &str = "validation_error";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// An exported audio file confirmed to exist and hold data
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    path: PathBuf,
    size_bytes: u64,
}

impl AudioArtifact {
    /// Check that `path` is a non-empty file and resolve it to an absolute path
    pub async fn verify(path: &Path) -> Result<Self, GenerationError> {
        let missing = || GenerationError::MissingAudio(path.display().to_string());

        let metadata = tokio::fs::metadata(path).await.map_err(|_| missing())?;
        if !metadata.is_file() || metadata.len() == 0 {
            return Err(missing());
        }

        let path = tokio::fs::canonicalize(path).await.map_err(|_| missing())?;

        Ok(Self {
            path,
            size_bytes: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Result of a successful generation
///
/// Built only from an [`AudioArtifact`], so `audio_path` always names a
/// file that existed and was non-empty when the response was created.
#[derive(Debug, Clone, Serialize)]
pub struct PodcastResponse {
    pub title: String,
    pub target_duration_min: u32,
    pub actual_duration_min: f64,
    pub word_count: usize,
    pub speakers: String,
    pub gpt_model_used: String,
    pub tts_model_used: String,
    pub success: bool,
    audio_path: String,
    pub file_size_mb: f64,
    pub created_at: DateTime,
    pub segments_processed: usize,
}

impl PodcastResponse {
    pub fn new(
        request: &PodcastRequest,
        config: &Config,
        duration: Duration,
        segments_processed: usize,
        artifact: &AudioArtifact,
        created_at: DateTime,
    ) -> Self {
        Self {
            title: request.title().to_owned(),
            target_duration_min: request.podcast_length(),
            actual_duration_min: round_to(duration.as_secs_f64() / 60.0, 1),
            word_count: request.word_count(),
            speakers: config.speakers_label(),
            gpt_model_used: config.gpt_model.clone(),
            tts_model_used: config.tts_model.clone(),
            success: true,
            audio_path: artifact.path().display().to_string(),
            file_size_mb: round_to(bytes_to_mb(artifact.size_bytes()), 2),
            created_at,
            segments_processed,
        }
    }

    pub fn audio_path(&self) -> &str {
        &self.audio_path
    }
}

/// Serializable failure record returned in place of a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastError {
    pub error: String,
    pub success: bool,
    pub error_type: String,
    pub timestamp: DateTime,
}

impl PodcastError {
    pub fn new(error: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
            error_type: error_type.into(),
            timestamp: jiff::Zoned::now().datetime(),
        }
    }

    /// Failure while generating
    pub fn generation(error: impl Into<String>) -> Self {
        Self::new(error, GENERATION_ERROR)
    }

    /// Request rejected before any work started
    pub fn validation(error: impl Into<String>) -> Self {
        Self::new(error, VALIDATION_ERROR)
    }
}

impl std::fmt::Display for PodcastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_type, self.error)
    }
}

impl std::error::Error for PodcastError {}

impl From<GenerationError> for PodcastError {
    fn from(error: GenerationError) -> Self {
        Self::generation(error.to_string())
    }
}

impl From<crate::error::ValidationError> for PodcastError {
    fn from(error: crate::error::ValidationError) -> Self {
        Self::validation(error.to_string())
    }
}

#[allow(clippy::cast_precision_loss)]
fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
