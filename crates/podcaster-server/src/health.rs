use std::path::Path;

use jiff::civil::DateTime;
use podcaster_config::Config;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Configuration summary reported by a healthy server
#[derive(Debug, Clone, Serialize)]
pub struct HealthConfig {
    pub speakers: String,
    pub tts_model: String,
    pub gpt_model: String,
    pub output_directory: String,
}

/// Result of the `health_check` tool
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HealthConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime,
}

impl HealthReport {
    /// Inspect the configuration and the output directory
    pub fn check(config: &Config) -> Self {
        let timestamp = jiff::Zoned::now().datetime();

        if let Err(error) = check_output_directory(&config.output_directory) {
            tracing::error!("health check failed: {error}");

            return Self {
                status: HealthStatus::Unhealthy,
                config: None,
                error: Some(error),
                timestamp,
            };
        }

        Self {
            status: HealthStatus::Healthy,
            config: Some(HealthConfig {
                speakers: config.speakers_label(),
                tts_model: config.tts_model.clone(),
                gpt_model: config.gpt_model.clone(),
                output_directory: config.output_directory.display().to_string(),
            }),
            error: None,
            timestamp,
        }
    }
}

fn check_output_directory(dir: &Path) -> Result<(), String> {
    let metadata = std::fs::metadata(dir)
        .map_err(|e| format!("output directory {} is not accessible: {e}", dir.display()))?;

    if !metadata.is_dir() {
        return Err(format!("output directory {} is not a directory", dir.display()));
    }

    if metadata.permissions().readonly() {
        return Err(format!("output directory {} is read-only", dir.display()));
    }

    Ok(())
}
