// WHY: greedy left-to-right accumulation over sentence boundaries. The flush
// conditions are deliberately opportunistic: the min_length guard applies only
// when an accumulated run overflows, so clusters of short sentences can still
// ride together past the target. Downstream consumers depend on these exact
// flush points, so the loop mirrors them precisely.

use super::boundaries::sentence_boundaries;
use super::charmap::CharMap;
use super::clause::split_long_sentence;
use super::force::force_split;

/// Split an overlong paragraph at sentence boundaries, accumulating sentences
/// greedily up to `max_length` characters per segment.
///
/// Paragraphs with no detectable sentence boundary fall through to the forced
/// width split. A single sentence that alone exceeds `max_length` is handed to
/// the clause splitter.
pub fn split_by_sentences(text: &str, max_length: usize, min_length: usize) -> Vec<String> {
    let map = CharMap::new(text);
    let boundaries = sentence_boundaries(text, &map);

    if boundaries.is_empty() {
        return force_split(text, max_length);
    }

    let char_len = map.char_len();
    let mut segments: Vec<String> = Vec::new();
    let mut current_start = 0usize;
    let mut current_end = 0usize;

    for (i, &boundary) in boundaries.iter().enumerate() {
        let segment_length = boundary - current_start;

        if segment_length > max_length {
            // Flush the accumulated run, but only when it is worth keeping.
            if current_end > current_start && current_end - current_start >= min_length {
                segments.push(map.slice(current_start, current_end).trim().to_string());
                current_start = current_end;
            }

            // The single sentence ending at this boundary is itself too long.
            if boundary - current_start > max_length {
                if current_end > current_start {
                    segments.push(map.slice(current_start, current_end).trim().to_string());
                    current_start = current_end;
                }

                let long_sentence = map.slice(current_start, boundary);
                segments.extend(split_long_sentence(long_sentence, max_length));
                current_start = boundary;
                current_end = boundary;
                continue;
            }
        }

        current_end = boundary;

        let is_last = i == boundaries.len() - 1;
        let next_boundary = if is_last { char_len } else { boundaries[i + 1] };
        let would_exceed = next_boundary - current_start > max_length;

        if (is_last || would_exceed) && current_end > current_start {
            segments.push(map.slice(current_start, current_end).trim().to_string());
            current_start = current_end;
        }
    }

    // Trailing text past the last boundary.
    if current_start < char_len {
        let remaining = map.slice(current_start, char_len).trim();
        if !remaining.is_empty() {
            if remaining.chars().count() > max_length {
                segments.extend(force_split(remaining, max_length));
            } else {
                segments.push(remaining.to_string());
            }
        }
    }

    segments.retain(|s| !s.is_empty());
    segments
}
