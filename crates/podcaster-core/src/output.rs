use std::sync::OnceLock;

use audio::AudioFormat;
use jiff::civil::DateTime;
use regex::Regex;

/// Longest title segment kept in an output filename, in characters
const MAX_TITLE_SEGMENT: usize = 50;

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s-]").expect("must be valid regex"))
}

/// Reduce a title to a filename-safe segment
///
/// Keeps word characters and hyphens, capped at 50 characters.
pub fn sanitize_title(title: &str) -> String {
    disallowed()
        .replace_all(title, "")
        .trim()
        .chars()
        .take(MAX_TITLE_SEGMENT)
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// `podcast_<title>_<yyyyMMdd_HHmmss>.<ext>`
///
/// Two podcasts with the same title in the same second get the same name.
pub fn output_filename(title: &str, created_at: &DateTime, format: AudioFormat) -> String {
    format!(
        "podcast_{}_{}.{}",
        sanitize_title(title),
        created_at.strftime("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
