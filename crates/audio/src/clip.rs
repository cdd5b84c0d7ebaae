use std::io::Cursor;
use std::time::Duration;

use crate::{AudioError, AudioFormat, PCM_CHANNELS, PCM_SAMPLE_RATE, Result};

/// Decoded audio held in memory as interleaved 16-bit samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl Default for AudioClip {
    fn default() -> Self {
        Self::empty()
    }
}

impl AudioClip {
    pub const fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Zero-length clip in the speech service's native layout
    pub const fn empty() -> Self {
        Self::new(Vec::new(), PCM_SAMPLE_RATE, PCM_CHANNELS)
    }

    /// Silence of the given duration
    pub fn silent(duration: Duration, sample_rate: u32, channels: u16) -> Self {
        let frames = duration.as_millis() * u128::from(sample_rate) / 1000;
        let len = usize::try_from(frames)
            .unwrap_or(usize::MAX)
            .saturating_mul(usize::from(channels));

        Self::new(vec![0; len], sample_rate, channels)
    }

    /// Silence sharing this clip's layout
    #[must_use]
    pub fn silence_like(&self, duration: Duration) -> Self {
        Self::silent(duration, self.sample_rate, self.channels)
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub const fn channels(&self) -> u16 {
        self.channels
    }

    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of sample frames (one sample per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels.max(1))
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }

        let frames = u64::try_from(self.frames()).unwrap_or(u64::MAX);
        Duration::from_micros(frames.saturating_mul(1_000_000) / u64::from(self.sample_rate))
    }

    /// Decode encoded bytes into a clip
    pub fn decode(bytes: &[u8], format: AudioFormat) -> Result<Self> {
        match format {
            AudioFormat::Pcm => decode_pcm(bytes),
            AudioFormat::Wav => decode_wav(bytes),
        }
    }

    /// Encode the clip into bytes
    pub fn encode(&self, format: AudioFormat) -> Result<Vec<u8>> {
        match format {
            AudioFormat::Pcm => self.encode_pcm(),
            AudioFormat::Wav => self.encode_wav(),
        }
    }

    /// Append another clip after this one
    ///
    /// An empty clip takes on the layout of whatever is appended to it.
    pub fn append(&mut self, other: Self) -> Result<()> {
        if self.samples.is_empty() {
            *self = other;
            return Ok(());
        }

        if other.samples.is_empty() {
            return Ok(());
        }

        if other.sample_rate != self.sample_rate || other.channels != self.channels {
            return Err(AudioError::LayoutMismatch {
                expected_rate: self.sample_rate,
                expected_channels: self.channels,
                found_rate: other.sample_rate,
                found_channels: other.channels,
            });
        }

        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }

    /// Join clips in order; no clips yields a zero-length clip
    pub fn concat(clips: impl IntoIterator<Item = Self>) -> Result<Self> {
        clips.into_iter().try_fold(Self::empty(), |mut combined, clip| {
            combined.append(clip)?;
            Ok(combined)
        })
    }

    fn encode_pcm(&self) -> Result<Vec<u8>> {
        if !self.samples.is_empty() && (self.sample_rate != PCM_SAMPLE_RATE || self.channels != PCM_CHANNELS) {
            return Err(AudioError::UnsupportedPcmLayout {
                expected_rate: PCM_SAMPLE_RATE,
                sample_rate: self.sample_rate,
                channels: self.channels,
            });
        }

        Ok(self.samples.iter().flat_map(|sample| sample.to_le_bytes()).collect())
    }

    fn encode_wav(&self) -> Result<Vec<u8>> {
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::with_capacity(44 + self.samples.len() * 2));
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;

        Ok(cursor.into_inner())
    }
}

fn decode_pcm(bytes: &[u8]) -> Result<AudioClip> {
    if !bytes.len().is_multiple_of(2) {
        return Err(AudioError::TruncatedPcm { len: bytes.len() });
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(AudioClip::new(samples, PCM_SAMPLE_RATE, PCM_CHANNELS))
}

fn decode_wav(bytes: &[u8]) -> Result<AudioClip> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader.into_samples::<i16>().collect::<std::result::Result<Vec<_>, _>>()?,
        (hound::SampleFormat::Float, 32) => reader
            .into_samples::<f32>()
            .map(|sample| sample.map(float_to_i16))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        (hound::SampleFormat::Int, bits) => return Err(AudioError::UnsupportedWav { bits, kind: "integer" }),
        (hound::SampleFormat::Float, bits) => return Err(AudioError::UnsupportedWav { bits, kind: "float" }),
    };

    Ok(AudioClip::new(samples, spec.sample_rate, spec.channels))
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
}
