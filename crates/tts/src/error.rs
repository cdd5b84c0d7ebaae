use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// The service could not be reached
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// The service rejected the credential
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The service rejected the request body
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other non-success status from the service
    #[error("speech service returned {status}: {message}")]
    ProviderApiError { status: u16, message: String },

    /// The service answered successfully but sent no audio
    #[error("speech service returned no audio")]
    EmptyAudio,

    /// The service sent audio in a different format than requested
    #[error("speech service returned `{found}` audio, expected `{expected}`")]
    UnexpectedContentType { expected: &'static str, found: String },

    /// The response body could not be read
    #[error("failed to read speech response: {0}")]
    ResponseBody(String),

    /// Synthesized chunks could not be decoded, joined or re-encoded
    #[error("audio processing failed: {0}")]
    Audio(#[from] audio::AudioError),
}
