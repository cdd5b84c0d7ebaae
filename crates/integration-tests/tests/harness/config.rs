//! Programmatic configuration builder for integration tests

use std::path::Path;
use std::sync::Arc;

use podcaster_config::{Config, Voice};
use secrecy::SecretString;

/// API key the mock speech service accepts
pub const TEST_API_KEY: &str = "test-key";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Defaults matching an unconfigured server, writing into `output_directory`
    pub fn new(output_directory: &Path) -> Self {
        Self {
            config: Config {
                openai_api_key: SecretString::from(TEST_API_KEY),
                openai_base_url: None,
                tts_model: "tts-1".to_owned(),
                gpt_model: "gpt-4o-mini".to_owned(),
                speaker1_name: "Alex".to_owned(),
                speaker2_name: "Jordan".to_owned(),
                speaker1_voice: Voice::Alloy,
                speaker2_voice: Voice::Nova,
                default_podcast_length: 10,
                output_directory: output_directory.to_path_buf(),
            },
        }
    }

    /// Point the speech client at a mock backend
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.openai_base_url = Some(base_url.to_owned());
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.config.openai_api_key = SecretString::from(api_key);
        self
    }

    pub fn with_speakers(mut self, speaker1: (&str, Voice), speaker2: (&str, Voice)) -> Self {
        self.config.speaker1_name = speaker1.0.to_owned();
        self.config.speaker1_voice = speaker1.1;
        self.config.speaker2_name = speaker2.0.to_owned();
        self.config.speaker2_voice = speaker2.1;
        self
    }

    /// Build the final config
    pub fn build(self) -> Arc<Config> {
        Arc::new(self.config)
    }
}
