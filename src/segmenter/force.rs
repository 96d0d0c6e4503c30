// WHY: last resort for text with no usable punctuation at all. Parts are
// sized by even distribution (a 310-char run at max 150 becomes three ~103s,
// not 150+150+10), with a bounded search for a nearby space so words survive
// the cut when one exists.

use super::charmap::CharMap;

/// How far a cut may drift from its computed position to land on a space.
const SPACE_SEARCH_WINDOW: usize = 20;

/// Divide `text` into evenly sized width-based parts of at most roughly
/// `max_length` characters, preferring cuts adjacent to a space.
pub fn force_split(text: &str, max_length: usize) -> Vec<String> {
    let map = CharMap::new(text);
    let char_len = map.char_len();

    if char_len <= max_length {
        return vec![text.trim().to_string()];
    }

    let num_parts = char_len.div_ceil(max_length);
    let target_length = char_len.div_ceil(num_parts);

    let mut segments: Vec<String> = Vec::new();
    let mut start = 0usize;

    for i in 0..num_parts {
        let mut end = start + target_length;

        if i == num_parts - 1 {
            end = char_len;
        } else if end < char_len {
            let space_before = map.space_at_or_before(end);
            let space_after = map.space_at_or_after(end);

            // Prefer breaking just after a space near the computed cut.
            if let Some(before) = space_before.filter(|&b| b > start && end - b <= SPACE_SEARCH_WINDOW) {
                end = before + 1;
            } else if let Some(after) = space_after.filter(|&a| a - end <= SPACE_SEARCH_WINDOW) {
                end = after + 1;
            }
        }

        let segment = map.slice(start, end).trim();
        if !segment.is_empty() {
            segments.push(segment.to_string());
        }
        start = end;
    }

    segments.retain(|s| !s.is_empty());
    segments
}
