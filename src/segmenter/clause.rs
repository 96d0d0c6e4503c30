// WHY: a single sentence past max_length has no sentence boundary to use, so
// it is divided evenly across ceil(len / max_length) parts, snapping each cut
// to the nearest comma-level break when one is close enough. Even distribution
// beats greedy max-packing here: it avoids a full-width part followed by a
// tiny remainder.

use super::boundaries::soft_breaks;
use super::charmap::CharMap;
use super::force::force_split;

/// Split one overlong sentence at soft breaks, balancing part lengths.
///
/// With no soft break available this falls back to the forced width split.
/// A cut candidate is accepted only when it lies within half the target
/// length of the ideal cut point; otherwise the cut lands exactly on target,
/// clause boundary or not.
pub fn split_long_sentence(sentence: &str, max_length: usize) -> Vec<String> {
    let map = CharMap::new(sentence);
    let breaks = soft_breaks(sentence, &map);

    if breaks.is_empty() {
        return force_split(sentence, max_length);
    }

    let char_len = map.char_len();
    let num_parts = char_len.div_ceil(max_length);
    let target_length = char_len.div_ceil(num_parts);

    let mut parts: Vec<String> = Vec::new();
    let mut current_start = 0usize;

    for i in 0..num_parts {
        let target_end = current_start + target_length;

        // Final part absorbs the rounding remainder.
        if i == num_parts - 1 {
            parts.push(map.slice(current_start, char_len).trim().to_string());
            break;
        }

        let mut best_break: Option<usize> = None;
        let mut best_distance = usize::MAX;

        for &break_pos in &breaks {
            if break_pos <= current_start {
                continue;
            }
            let distance = break_pos.abs_diff(target_end);
            if distance < best_distance {
                best_distance = distance;
                best_break = Some(break_pos);
            }
        }

        match best_break {
            // distance <= target_length * 0.5, kept exact in integers
            Some(break_pos) if best_distance * 2 <= target_length => {
                parts.push(map.slice(current_start, break_pos).trim().to_string());
                current_start = break_pos;
            }
            _ => {
                parts.push(map.slice(current_start, target_end).trim().to_string());
                current_start = target_end;
            }
        }
    }

    parts.retain(|p| !p.is_empty());
    parts
}
