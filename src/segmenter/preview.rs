// WHY: read-only projection of a split for confirmation UIs, serialized with
// the camelCase field names the admin frontend expects.

use serde::{Deserialize, Serialize};

use super::{split_text, SplitOptions};

/// Leading characters of a segment shown in the preview.
const PREVIEW_CHARS: usize = 50;

/// Projection of a split result, for display before committing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitPreview {
    /// Character count of the input, whitespace included, before any split.
    pub original_length: usize,
    pub segment_count: usize,
    pub segments: Vec<SegmentPreview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPreview {
    /// 1-based position of the segment within the split.
    pub index: usize,
    /// Character count of the trimmed segment.
    pub length: usize,
    /// First 50 characters, with "..." appended when truncated.
    pub preview: String,
}

/// Run a split and project it for preview.
pub fn preview_split(text: &str, options: &SplitOptions) -> SplitPreview {
    let segments = split_text(text, options);

    let previews = segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            let length = segment.chars().count();
            let mut preview: String = segment.chars().take(PREVIEW_CHARS).collect();
            if length > PREVIEW_CHARS {
                preview.push_str("...");
            }
            SegmentPreview {
                index: idx + 1,
                length,
                preview,
            }
        })
        .collect();

    SplitPreview {
        original_length: text.chars().count(),
        segment_count: segments.len(),
        segments: previews,
    }
}
