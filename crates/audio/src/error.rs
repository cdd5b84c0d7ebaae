use thiserror::Error;

pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio codec errors
#[derive(Debug, Error)]
pub enum AudioError {
    /// The WAV container could not be read or written
    #[error("wav codec error: {0}")]
    Wav(#[from] hound::Error),

    /// Raw PCM input ended in the middle of a sample
    #[error("pcm stream of {len} bytes is not a whole number of 16-bit samples")]
    TruncatedPcm { len: usize },

    /// WAV sample encoding other than 16-bit integer or 32-bit float
    #[error("unsupported wav encoding: {bits}-bit {kind}")]
    UnsupportedWav { bits: u16, kind: &'static str },

    /// Raw PCM output only carries the service's native layout
    #[error("pcm output requires {expected_rate} Hz mono, clip is {sample_rate} Hz with {channels} channel(s)")]
    UnsupportedPcmLayout {
        expected_rate: u32,
        sample_rate: u32,
        channels: u16,
    },

    /// Clips with different layouts cannot be joined
    #[error("cannot join {found_rate} Hz/{found_channels}ch audio onto {expected_rate} Hz/{expected_channels}ch audio")]
    LayoutMismatch {
        expected_rate: u32,
        expected_channels: u16,
        found_rate: u32,
        found_channels: u16,
    },
}
