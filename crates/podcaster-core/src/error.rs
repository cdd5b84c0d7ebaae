use thiserror::Error;

/// Dialogue parsing failures
#[derive(Debug, Error)]
pub enum ParseError {
    /// Nothing in the dialogue was attributed to a configured speaker
    #[error("No valid speaker lines found in dialogue")]
    NoSpeakerLines,
}

/// Request field constraint violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title must be at most {max} characters, got {len}")]
    TitleTooLong { len: usize, max: usize },

    #[error("dialogue must not be empty")]
    EmptyDialogue,

    #[error("dialogue must be at least {min} characters, got {len}")]
    DialogueTooShort { len: usize, min: usize },

    #[error("podcast_length must be between {min} and {max} minutes, got {value}")]
    LengthOutOfRange { value: i64, min: u32, max: u32 },
}

/// Anything that can abort podcast generation
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] tts::TtsError),

    #[error("audio processing failed: {0}")]
    Audio(#[from] audio::AudioError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The exported file is missing or empty after writing
    #[error("Audio file does not exist at path: {0}")]
    MissingAudio(String),

    #[error("invalid marker or speaker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
