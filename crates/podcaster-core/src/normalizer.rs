use std::sync::OnceLock;

use regex::Regex;

use crate::markers::SpeechMarkers;

/// Leading `Name: ` label left inside a line's text
fn label_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z\s\-']+:\s+").expect("must be valid regex"))
}

/// Any bracketed annotation not covered by the marker set
fn bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[.*?\]").expect("must be valid regex"))
}

/// Rewrites a dialogue line into text suitable for speech synthesis
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    markers: SpeechMarkers,
    emphasis: Regex,
}

impl TextNormalizer {
    /// Build a normalizer for the given marker set
    pub fn new(markers: SpeechMarkers) -> Result<Self, regex::Error> {
        let pattern = format!(
            "{}(.*?){}",
            regex::escape(&markers.emphasis_start),
            regex::escape(&markers.emphasis_end)
        );

        let emphasis = Regex::new(&pattern).inspect_err(|e| {
            tracing::error!("failed to build emphasis pattern: {e}");
        })?;

        Ok(Self { markers, emphasis })
    }

    /// Normalize one line of dialogue
    ///
    /// Strips a leading speaker label, turns pauses and breaths into
    /// punctuation, unwraps emphasis, drops any other bracketed annotation
    /// and trims the result.
    pub fn normalize(&self, text: &str) -> String {
        let markers = &self.markers;

        let text = label_prefix().replace(text, "");

        let text = replace_marker(&text, &markers.pause_short, ",");
        let text = replace_marker(&text, &markers.pause_medium, ".");
        let text = replace_marker(&text, &markers.pause_long, "...");

        let text = self.emphasis.replace_all(&text, "$1");

        let text = replace_marker(&text, &markers.breath, ",");
        let text = replace_marker(&text, &markers.thoughtful, "...");

        bracketed().replace_all(&text, "").trim().to_owned()
    }
}

/// Empty markers are never substituted
fn replace_marker(text: &str, marker: &str, replacement: &str) -> String {
    if marker.is_empty() {
        text.to_owned()
    } else {
        text.replace(marker, replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new(SpeechMarkers::default()).unwrap()
    }

    #[test]
    fn strips_leading_speaker_label() {
        assert_eq!(normalizer().normalize("Alex: Welcome back."), "Welcome back.");
        assert_eq!(normalizer().normalize("Mary Jane: Hi!"), "Hi!");
    }

    #[test]
    fn label_must_be_capitalized_and_leading() {
        assert_eq!(normalizer().normalize("note: lowercase stays"), "note: lowercase stays");
        assert_eq!(normalizer().normalize("Time 10: later"), "Time 10: later");
    }

    #[test]
    fn pauses_become_punctuation() {
        let text = "Well[pause-short] yes[pause-medium] and then[pause-long] no";
        assert_eq!(normalizer().normalize(text), "Well, yes. and then... no");
    }

    #[test]
    fn emphasis_markers_are_removed_and_content_kept() {
        let text = "This is [emphasis]really[/emphasis] and [emphasis]truly big[/emphasis] news";
        assert_eq!(normalizer().normalize(text), "This is really and truly big news");
    }

    #[test]
    fn emphasis_match_is_non_greedy() {
        let text = "[emphasis]a[/emphasis] b [emphasis]c[/emphasis]";
        assert_eq!(normalizer().normalize(text), "a b c");
    }

    #[test]
    fn breath_and_thoughtful_become_punctuation() {
        let text = "Okay[breath] so[thoughtful] maybe";
        assert_eq!(normalizer().normalize(text), "Okay, so... maybe");
    }

    #[test]
    fn unknown_annotations_are_dropped() {
        let text = "[TRANSITION] Back to it [SOUND EFFECT: applause] now.";
        assert_eq!(normalizer().normalize(text), "Back to it  now.");
    }

    #[test]
    fn annotation_only_line_normalizes_to_empty() {
        assert_eq!(normalizer().normalize("  [TRANSITION]  "), "");
    }

    #[test]
    fn plain_text_is_unchanged() {
        let normalizer = normalizer();
        for text in ["Hello, welcome.", "Thanks for having me...", "It's 3 o'clock - time to go!"] {
            let once = normalizer.normalize(text);
            assert_eq!(once, text);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn custom_markers_replace_defaults_wholesale() {
        let markers = SpeechMarkers {
            pause_short: "<p>".to_owned(),
            emphasis_start: "**".to_owned(),
            emphasis_end: "**".to_owned(),
            ..SpeechMarkers::default()
        };
        let normalizer = TextNormalizer::new(markers).unwrap();

        assert_eq!(normalizer.normalize("a<p> **bold** (x)"), "a, bold (x)");
    }

    #[test]
    fn empty_marker_is_ignored() {
        let markers = SpeechMarkers {
            breath: String::new(),
            ..SpeechMarkers::default()
        };
        let normalizer = TextNormalizer::new(markers).unwrap();

        assert_eq!(normalizer.normalize("no commas here"), "no commas here");
    }
}
