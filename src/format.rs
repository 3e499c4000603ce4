//! Transcript presentation.
//!
//! Two pure views over a caption segment sequence: concatenated plain text
//! and per-segment "timestamp - text" lines. No I/O and no failure modes;
//! an empty input yields an empty output.

use crate::transcript::CaptionSegment;

/// Join all caption text into one string, single-space separated, in
/// segment order.
pub fn plain_text(segments: &[CaptionSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one "timestamp - text" line per segment, in segment order.
///
/// The timestamp is `H:MM:SS` once the start offset reaches an hour,
/// `M:SS` below that. Seconds are always two digits; minutes are only
/// zero-padded in the hour form.
pub fn timestamps(segments: &[CaptionSegment]) -> Vec<String> {
    segments
        .iter()
        .map(|s| {
            let total = s.start as u64;
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            let seconds = total % 60;
            if hours > 0 {
                format!("{hours}:{minutes:02}:{seconds:02} - {}", s.text)
            } else {
                format!("{minutes}:{seconds:02} - {}", s.text)
            }
        })
        .collect()
}
