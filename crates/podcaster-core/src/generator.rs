use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use audio::{AudioClip, AudioFormat};
use podcaster_config::Config;
use tts::SpeechClient;

use crate::{
    error::GenerationError,
    markers::SpeechMarkers,
    normalizer::TextNormalizer,
    output::output_filename,
    parser::DialogueParser,
    request::PodcastRequest,
    response::{AudioArtifact, PodcastError, PodcastResponse},
};

/// Silence inserted after every spoken line
pub const LINE_PAUSE: Duration = Duration::from_millis(500);
/// Encoding of exported podcast files
pub const EXPORT_FORMAT: AudioFormat = AudioFormat::Wav;

/// Turns validated podcast requests into exported audio files
///
/// Holds no per-request state, so one generator can serve concurrent
/// requests. Within a request, lines are synthesized one after another.
pub struct PodcastGenerator {
    config: Arc<Config>,
    normalizer: TextNormalizer,
    parser: DialogueParser,
    speech: SpeechClient,
}

impl PodcastGenerator {
    pub fn new(config: Arc<Config>, speech: SpeechClient, markers: SpeechMarkers) -> Result<Self, GenerationError> {
        let normalizer = TextNormalizer::new(markers)?;
        let parser = DialogueParser::new(&config.speaker1_name, &config.speaker2_name)?;

        Ok(Self {
            config,
            normalizer,
            parser,
            speech,
        })
    }

    /// Generator backed by the configured speech service and default markers
    pub fn from_config(config: Arc<Config>) -> Result<Self, GenerationError> {
        let speech = SpeechClient::from_config(&config);
        Self::new(config, speech, SpeechMarkers::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a podcast, reporting any failure as a [`PodcastError`]
    pub async fn generate(&self, request: &PodcastRequest) -> Result<PodcastResponse, PodcastError> {
        tracing::info!(title = request.title(), "generating podcast");

        match self.assemble(request).await {
            Ok(response) => {
                tracing::info!(
                    audio_path = response.audio_path(),
                    segments = response.segments_processed,
                    duration_min = response.actual_duration_min,
                    "podcast generated successfully"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!(title = request.title(), "error generating podcast: {e}");
                Err(e.into())
            }
        }
    }

    async fn assemble(&self, request: &PodcastRequest) -> Result<PodcastResponse, GenerationError> {
        let lines = self.parser.parse(request.dialogue())?;

        let mut clips = Vec::with_capacity(lines.len() * 2);
        let mut segments_processed = 0;

        for line in &lines {
            let text = self.normalizer.normalize(&line.text);

            if text.is_empty() {
                tracing::warn!(speaker = %line.speaker, "skipping line with no speakable text");
                continue;
            }

            let voice = self.config.voice_for(&line.speaker);
            let audio = self.speech.text_to_speech(&text, voice).await?;
            let clip = AudioClip::decode(&audio, self.speech.format())?;

            tracing::debug!(
                speaker = %line.speaker,
                %voice,
                duration_ms = clip.duration().as_millis(),
                "synthesized line"
            );

            let pause = clip.silence_like(LINE_PAUSE);
            clips.push(clip);
            clips.push(pause);
            segments_processed += 1;
        }

        let combined = AudioClip::concat(clips)?;

        let created_at = jiff::Zoned::now().datetime();
        let path = self
            .config
            .output_directory
            .join(output_filename(request.title(), &created_at, EXPORT_FORMAT));

        export(&combined, &path).await?;
        let artifact = AudioArtifact::verify(&path).await?;

        Ok(PodcastResponse::new(
            request,
            &self.config,
            combined.duration(),
            segments_processed,
            &artifact,
            created_at,
        ))
    }
}

/// Encode and write the final clip, removing any partial file on failure
async fn export(clip: &AudioClip, path: &Path) -> Result<(), GenerationError> {
    let bytes = clip.encode(EXPORT_FORMAT)?;

    if let Err(source) = tokio::fs::write(path, &bytes).await {
        if let Err(e) = tokio::fs::remove_file(path).await
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %path.display(), "failed to remove partial podcast file: {e}");
        }

        return Err(GenerationError::Io {
            context: format!("failed to write podcast file {}", path.display()),
            source,
        });
    }

    Ok(())
}
