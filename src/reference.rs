// WHY: display references are a caller-side concern, but the helper cluster
// lives next to the splitter so content tooling shares one format rule
// instead of re-deriving the poem/prose suffix in every call site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of literary content a segment belongs to. Decides the unit suffix
/// used in human-readable position labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Bible,
    Novel,
    Poem,
    Essay,
}

impl ContentType {
    /// Unit suffix for a section label: stanza (`연`) for poems, paragraph
    /// (`문단`) for everything else.
    pub fn section_suffix(&self) -> &'static str {
        match self {
            ContentType::Poem => "연",
            _ => "문단",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Bible => "bible",
            ContentType::Novel => "novel",
            ContentType::Poem => "poem",
            ContentType::Essay => "essay",
        };
        f.write_str(name)
    }
}

/// Human-readable label for one section, e.g. `3연` or `3문단`.
pub fn display_reference(section: u32, content_type: ContentType) -> String {
    format!("{section}{}", content_type.section_suffix())
}

/// Labels for every segment of a split, derived from the pre-split label.
///
/// A single-segment split keeps the base label unchanged; a multi-segment
/// split appends `-1..-N` so existing references stay recognizable.
pub fn generate_display_references(base_reference: &str, segment_count: usize) -> Vec<String> {
    if segment_count == 1 {
        return vec![base_reference.to_string()];
    }

    (1..=segment_count)
        .map(|n| format!("{base_reference}-{n}"))
        .collect()
}
