use serde::Deserialize;

/// Inline speech-control tokens recognized in dialogue text
///
/// Overriding replaces the whole set; there is no per-token merge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechMarkers {
    pub pause_short: String,
    pub pause_medium: String,
    pub pause_long: String,
    pub emphasis_start: String,
    pub emphasis_end: String,
    pub breath: String,
    pub thoughtful: String,
}

impl Default for SpeechMarkers {
    fn default() -> Self {
        Self {
            pause_short: "[pause-short]".to_owned(),
            pause_medium: "[pause-medium]".to_owned(),
            pause_long: "[pause-long]".to_owned(),
            emphasis_start: "[emphasis]".to_owned(),
            emphasis_end: "[/emphasis]".to_owned(),
            breath: "[breath]".to_owned(),
            thoughtful: "[thoughtful]".to_owned(),
        }
    }
}
