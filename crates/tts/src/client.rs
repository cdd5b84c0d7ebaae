use audio::{AudioClip, AudioFormat};
use podcaster_config::{Config, Voice};

use crate::{
    error::{Result, TtsError},
    provider::{TtsProvider, openai_tts::OpenAiTtsProvider},
    types::{SpeechRequest, SpeechResponse},
};

/// Largest input, in characters, sent in a single synthesis call
pub const MAX_CHUNK_CHARS: usize = 4000;

/// Turns text into encoded audio, splitting oversized text into chunks
///
/// Chunks are synthesized strictly in order, one call at a time.
pub struct SpeechClient {
    provider: Box<dyn TtsProvider>,
    model: String,
    format: AudioFormat,
    max_chunk_chars: usize,
}

impl SpeechClient {
    pub fn new(provider: Box<dyn TtsProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            format: AudioFormat::Pcm,
            max_chunk_chars: MAX_CHUNK_CHARS,
        }
    }

    /// Client for the configured `OpenAI` speech service
    pub fn from_config(config: &Config) -> Self {
        let provider = OpenAiTtsProvider::new(config.openai_api_key.clone(), config.openai_base_url.clone());
        Self::new(Box::new(provider), config.tts_model.clone())
    }

    /// Override the chunk threshold (at least one character)
    #[must_use]
    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars.max(1);
        self
    }

    /// Encoding of the bytes returned by [`SpeechClient::text_to_speech`]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Synthesize `text` with `voice`
    ///
    /// Text within the chunk threshold is returned exactly as the service
    /// produced it. Longer text is synthesized chunk by chunk, decoded,
    /// joined in order and re-encoded. Any failed call aborts the whole
    /// operation.
    pub async fn text_to_speech(&self, text: &str, voice: Voice) -> Result<Vec<u8>> {
        tracing::info!(
            provider = self.provider.name(),
            model = %self.model,
            %voice,
            "converting text to speech"
        );

        let chunks = chunk_text(text, self.max_chunk_chars);

        if chunks.len() <= 1 {
            return Ok(self.synthesize(text, voice).await?.audio);
        }

        let total = chunks.len();
        let mut clips = Vec::with_capacity(total);

        for (index, chunk) in chunks.into_iter().enumerate() {
            tracing::debug!(chunk = index + 1, total, chars = chunk.chars().count(), "synthesizing chunk");

            let response = self.synthesize(chunk, voice).await?;
            clips.push(AudioClip::decode(&response.audio, self.format)?);
        }

        let combined = AudioClip::concat(clips)?;

        tracing::debug!(chunks = total, duration_ms = combined.duration().as_millis(), "joined chunks");

        Ok(combined.encode(self.format)?)
    }

    async fn synthesize(&self, input: &str, voice: Voice) -> Result<SpeechResponse> {
        let request = SpeechRequest {
            model: self.model.clone(),
            input: input.to_owned(),
            voice,
            response_format: self.format,
        };

        let response = self.provider.synthesize(request).await?;

        if !self.format.matches_content_type(&response.content_type) {
            tracing::error!(
                content_type = %response.content_type,
                expected = self.format.mime_type(),
                "speech service returned an unexpected audio format"
            );
            return Err(TtsError::UnexpectedContentType {
                expected: self.format.mime_type(),
                found: response.content_type,
            });
        }

        Ok(response)
    }
}

/// Split text into consecutive pieces of at most `max_chars` characters
///
/// Splits fall on character boundaries; only the last piece may be shorter.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let split = rest.char_indices().nth(max_chars).map_or(rest.len(), |(i, _)| i);
        let (chunk, tail) = rest.split_at(split);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}
