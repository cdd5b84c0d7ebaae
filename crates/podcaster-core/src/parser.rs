use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;

/// One attributed line of dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerLine {
    /// One of the two configured speaker names
    pub speaker: String,
    /// Trimmed, non-empty line text
    pub text: String,
}

/// Splits raw dialogue into lines attributed to the two configured speakers
///
/// Names match literally and case-sensitively. Labels for anyone else are
/// not recognized; their text stays attached to the preceding line.
#[derive(Debug, Clone)]
pub struct DialogueParser {
    label: Regex,
}

impl DialogueParser {
    pub fn new(speaker1: &str, speaker2: &str) -> Result<Self, regex::Error> {
        let pattern = format!("({}|{}): ", regex::escape(speaker1), regex::escape(speaker2));
        let label = Regex::new(&pattern)?;

        Ok(Self { label })
    }

    /// Parse dialogue into speaker lines, in order of appearance
    ///
    /// Each line runs from its `Name: ` label to the next label or the end
    /// of the text, across line breaks. Blank lines are discarded.
    pub fn parse(&self, dialogue: &str) -> Result<Vec<SpeakerLine>, ParseError> {
        let labels: Vec<(usize, usize, &str)> = self
            .label
            .captures_iter(dialogue)
            .filter_map(|captures| {
                let label = captures.get(0)?;
                let name = captures.get(1)?;
                Some((label.start(), label.end(), name.as_str()))
            })
            .collect();

        let lines: Vec<SpeakerLine> = labels
            .iter()
            .enumerate()
            .filter_map(|(index, &(_, text_start, speaker))| {
                let text_end = labels.get(index + 1).map_or(dialogue.len(), |next| next.0);
                let text = dialogue[text_start..text_end].trim();

                (!text.is_empty()).then(|| SpeakerLine {
                    speaker: speaker.to_owned(),
                    text: text.to_owned(),
                })
            })
            .collect();

        if lines.is_empty() {
            tracing::error!("no valid speaker lines found in dialogue");
            return Err(ParseError::NoSpeakerLines);
        }

        tracing::debug!(lines = lines.len(), "parsed dialogue");

        Ok(lines)
    }
}
