use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use crate::{Config, DEFAULT_GPT_MODEL, DEFAULT_PODCAST_LENGTH, DEFAULT_TTS_MODEL, PODCAST_LENGTH_RANGE, Voice};

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value, the API key is
    /// missing, or the output directory cannot be created
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset and empty variables fall back to their defaults, except
    /// `OPENAI_API_KEY` which is required.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let openai_api_key = var("OPENAI_API_KEY")
            .map(SecretString::from)
            .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY must be provided"))?;

        let speaker1_voice = Voice::parse(&var("SPEAKER1_VOICE").unwrap_or_else(|| "alloy".to_owned()))
            .map_err(|e| anyhow::anyhow!("SPEAKER1_VOICE: {e}"))?;
        let speaker2_voice = Voice::parse(&var("SPEAKER2_VOICE").unwrap_or_else(|| "nova".to_owned()))
            .map_err(|e| anyhow::anyhow!("SPEAKER2_VOICE: {e}"))?;

        let default_podcast_length = match var("DEFAULT_PODCAST_LENGTH") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("DEFAULT_PODCAST_LENGTH must be an integer: {e}"))?,
            None => DEFAULT_PODCAST_LENGTH,
        };

        let output_directory = match var("OUTPUT_DIRECTORY") {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()
                .map_err(|e| anyhow::anyhow!("failed to resolve the current directory: {e}"))?,
        };

        let config = Self {
            openai_api_key,
            openai_base_url: var("OPENAI_BASE_URL"),
            tts_model: var("OPENAI_TTS_MODEL").unwrap_or_else(|| DEFAULT_TTS_MODEL.to_owned()),
            gpt_model: var("OPENAI_GPT_MODEL").unwrap_or_else(|| DEFAULT_GPT_MODEL.to_owned()),
            speaker1_name: var("SPEAKER1_NAME").map_or_else(|| "Alex".to_owned(), |name| name.trim().to_owned()),
            speaker2_name: var("SPEAKER2_NAME").map_or_else(|| "Jordan".to_owned(), |name| name.trim().to_owned()),
            speaker1_voice,
            speaker2_voice,
            default_podcast_length,
            output_directory,
        };

        config.validate()?;
        config.prepare_output_directory()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, the speakers are unusable, or
    /// the default length is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY must be provided");
        }

        let speaker1 = self.speaker1_name.trim();
        let speaker2 = self.speaker2_name.trim();

        if speaker1.is_empty() || speaker2.is_empty() {
            anyhow::bail!("speaker names must not be empty");
        }

        if speaker1 != self.speaker1_name || speaker2 != self.speaker2_name {
            anyhow::bail!("speaker names must not start or end with whitespace");
        }

        if speaker1 == speaker2 {
            anyhow::bail!("speaker names must differ, both are `{speaker1}`");
        }

        if !PODCAST_LENGTH_RANGE.contains(&self.default_podcast_length) {
            anyhow::bail!(
                "DEFAULT_PODCAST_LENGTH must be between {} and {} minutes, got {}",
                PODCAST_LENGTH_RANGE.start(),
                PODCAST_LENGTH_RANGE.end(),
                self.default_podcast_length
            );
        }

        Ok(())
    }

    /// Create the output directory, including missing parents
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn prepare_output_directory(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.output_directory).map_err(|e| {
            anyhow::anyhow!(
                "failed to create output directory {}: {e}",
                self.output_directory.display()
            )
        })?;

        tracing::debug!(output_directory = %self.output_directory.display(), "output directory ready");

        Ok(())
    }
}
