// WHY: layered fallback pipeline for typing-sized segments. Each stage is a
// pure function and delegates one direction only: paragraph split, then
// sentence accumulation, then clause balancing, then forced width split.
// Every input string terminates in one defined path; nothing here returns an
// error or panics.

pub mod boundaries;
mod charmap;
pub mod clause;
pub mod force;
pub mod preview;
pub mod sentence;

pub use preview::{preview_split, SegmentPreview, SplitPreview};

/// Length constraints for a split.
#[derive(Debug, Clone, Copy)]
pub struct SplitOptions {
    /// Soft ceiling on segment length, in characters.
    pub max_length: usize,
    /// Minimum accumulated length below which a boundary flush is skipped
    /// when an overflow forces one.
    pub min_length: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
        }
    }
}

/// Split `text` into typing-sized segments.
///
/// Paragraphs already within `max_length` pass through unchanged; longer ones
/// are divided at sentence boundaries, then clause boundaries, then by width
/// as a last resort. Segments come back trimmed, non-empty, in source order.
///
/// Degenerate input with no paragraphs at all (empty or whitespace-only text)
/// yields a single segment holding the trimmed input, which may be empty.
/// This is the one case where an empty string can appear in the result.
pub fn split_text(text: &str, options: &SplitOptions) -> Vec<String> {
    let paragraphs = boundaries::split_paragraphs(text);

    if paragraphs.is_empty() {
        return vec![text.trim().to_string()];
    }

    let mut segments: Vec<String> = Vec::new();

    for paragraph in paragraphs {
        if paragraph.chars().count() <= options.max_length {
            segments.push(paragraph.to_string());
        } else {
            segments.extend(sentence::split_by_sentences(
                paragraph,
                options.max_length,
                options.min_length,
            ));
        }
    }

    segments.retain(|s| !s.is_empty());
    segments
}
