use audio::AudioFormat;
use podcaster_config::Voice;

/// One synthesis call to the speech service
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Model identifier (e.g. "tts-1")
    pub model: String,
    /// Text to synthesize
    pub input: String,
    pub voice: Voice,
    /// Encoding the service should respond with
    pub response_format: AudioFormat,
}

/// Raw audio returned by the speech service
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Content type reported by the service (e.g. "audio/pcm")
    pub content_type: String,
}
