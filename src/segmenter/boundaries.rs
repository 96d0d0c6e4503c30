// WHY: boundary detection is plain global-match iteration, collecting match
// end offsets into an ordered list before any segmentation decisions run.
// Keeping the scanners separate from the accumulator loops lets each stage
// stay a pure function over (text, offsets).

use regex_automata::meta::Regex;
use std::sync::OnceLock;

use super::charmap::CharMap;

/// Sentence terminators: `. ! ?` or ellipsis, an optional closing quote or
/// bracket, then whitespace or end of text. Covers the quote styles common in
/// Korean literary sources (`」`, `』`) alongside ASCII quotes.
const SENTENCE_ENDERS: &str = r#"[.!?…]["')」』]?(?:\s|$)"#;

/// Clause-level soft breaks: comma, semicolon, or ideographic comma, plus any
/// trailing whitespace.
const SOFT_BREAKS: &str = r"[,;、]\s*";

/// Paragraph separators: a blank-line run or a single newline.
const PARAGRAPH_BREAKS: &str = r"\n\s*\n|\n";

fn sentence_ender_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Pattern is a compile-time constant; construction cannot fail.
    RE.get_or_init(|| Regex::new(SENTENCE_ENDERS).expect("valid sentence ender pattern"))
}

fn soft_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SOFT_BREAKS).expect("valid soft break pattern"))
}

fn paragraph_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PARAGRAPH_BREAKS).expect("valid paragraph break pattern"))
}

/// Character positions just past each sentence terminator in `text`.
///
/// The reported position is the match end, so a terminator followed by a
/// space yields the position after that space. Segments are trimmed later,
/// which makes the consumed whitespace immaterial for output.
pub(crate) fn sentence_boundaries(text: &str, map: &CharMap) -> Vec<usize> {
    sentence_ender_regex()
        .find_iter(text)
        .map(|m| map.char_of_byte(m.end()))
        .collect()
}

/// Character positions just past each soft break (and its trailing
/// whitespace) in `sentence`.
pub(crate) fn soft_breaks(sentence: &str, map: &CharMap) -> Vec<usize> {
    soft_break_regex()
        .find_iter(sentence)
        .map(|m| map.char_of_byte(m.end()))
        .collect()
}

/// Split `text` into trimmed, non-empty paragraphs.
///
/// Blank-line runs and single newlines both separate paragraphs; the
/// alternation prefers the blank-line branch so `\n\s*\n` is consumed as one
/// separator rather than two.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut last_end = 0;
    for m in paragraph_break_regex().find_iter(text) {
        paragraphs.push(&text[last_end..m.start()]);
        last_end = m.end();
    }
    paragraphs.push(&text[last_end..]);

    paragraphs
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
