/// Sample rate of raw PCM returned by the speech service
pub const PCM_SAMPLE_RATE: u32 = 24_000;
/// Channel count of raw PCM returned by the speech service
pub const PCM_CHANNELS: u16 = 1;

/// Encoded audio representations understood by [`crate::AudioClip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    /// Headerless 16-bit signed little-endian mono at 24 kHz
    #[default]
    Pcm,
    /// RIFF/WAVE container
    Wav,
}

impl AudioFormat {
    /// Name used in speech service requests
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pcm => "pcm",
            Self::Wav => "wav",
        }
    }

    /// File extension for exported audio
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pcm => "pcm",
            Self::Wav => "wav",
        }
    }

    /// Whether a response `Content-Type` can carry this format
    ///
    /// Media type parameters are ignored and untyped binary bodies are
    /// accepted.
    pub fn matches_content_type(self, content_type: &str) -> bool {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/octet-stream" {
            return true;
        }

        match self {
            Self::Pcm => matches!(essence.as_str(), "audio/pcm" | "audio/l16"),
            Self::Wav => matches!(essence.as_str(), "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave"),
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pcm => "audio/pcm",
            Self::Wav => "audio/wav",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
