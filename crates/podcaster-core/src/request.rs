use podcaster_config::PODCAST_LENGTH_RANGE;

use crate::error::ValidationError;

/// Longest accepted title, in characters
pub const MAX_TITLE_CHARS: usize = 200;
/// Shortest accepted dialogue, in characters
pub const MIN_DIALOGUE_CHARS: usize = 10;

/// A validated podcast generation request
///
/// Only obtainable through [`PodcastRequest::new`], so every instance
/// satisfies the field constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastRequest {
    title: String,
    dialogue: String,
    podcast_length: u32,
}

impl PodcastRequest {
    /// Validate raw request fields
    ///
    /// The title is stored trimmed; the dialogue is kept verbatim.
    pub fn new(title: &str, dialogue: &str, podcast_length: i64) -> Result<Self, ValidationError> {
        let title_len = title.chars().count();
        if title_len == 0 || title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if title_len > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong {
                len: title_len,
                max: MAX_TITLE_CHARS,
            });
        }

        if dialogue.trim().is_empty() {
            return Err(ValidationError::EmptyDialogue);
        }
        let dialogue_len = dialogue.chars().count();
        if dialogue_len < MIN_DIALOGUE_CHARS {
            return Err(ValidationError::DialogueTooShort {
                len: dialogue_len,
                min: MIN_DIALOGUE_CHARS,
            });
        }

        let podcast_length = u32::try_from(podcast_length)
            .ok()
            .filter(|length| PODCAST_LENGTH_RANGE.contains(length))
            .ok_or(ValidationError::LengthOutOfRange {
                value: podcast_length,
                min: *PODCAST_LENGTH_RANGE.start(),
                max: *PODCAST_LENGTH_RANGE.end(),
            })?;

        Ok(Self {
            title: title.trim().to_owned(),
            dialogue: dialogue.to_owned(),
            podcast_length,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    /// Target length in minutes
    pub const fn podcast_length(&self) -> u32 {
        self.podcast_length
    }

    /// Whitespace-separated words in the raw dialogue
    pub fn word_count(&self) -> usize {
        self.dialogue.split_whitespace().count()
    }
}
