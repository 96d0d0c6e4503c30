// WHY: all length thresholds in the pipeline are character counts, but regex
// matches and str slicing work in bytes. One table per scanned text converts
// between the two domains without re-walking the string.

/// Char-indexed view over a borrowed text slice.
///
/// `offsets[i]` is the byte offset of character `i`; the table is built once
/// and every subsequent slice/search runs off it.
pub(crate) struct CharMap<'a> {
    text: &'a str,
    offsets: Vec<usize>,
}

impl<'a> CharMap<'a> {
    pub fn new(text: &'a str) -> Self {
        let offsets = text.char_indices().map(|(byte, _)| byte).collect();
        Self { text, offsets }
    }

    /// Number of characters in the mapped text.
    pub fn char_len(&self) -> usize {
        self.offsets.len()
    }

    /// Byte offset of the given character position, clamped to the text end.
    fn byte_at(&self, char_pos: usize) -> usize {
        match self.offsets.get(char_pos) {
            Some(&byte) => byte,
            None => self.text.len(),
        }
    }

    /// Slice by character range. Out-of-range positions clamp to the end, so
    /// callers can pass computed targets past the final character safely.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let start_byte = self.byte_at(start);
        let end_byte = self.byte_at(end);
        if start_byte >= end_byte {
            return "";
        }
        &self.text[start_byte..end_byte]
    }

    /// Character position of a byte offset. Byte offsets produced by regex
    /// matches always land on character boundaries.
    pub fn char_of_byte(&self, byte: usize) -> usize {
        self.offsets.partition_point(|&b| b < byte)
    }

    /// First space at or after the given character position.
    pub fn space_at_or_after(&self, from: usize) -> Option<usize> {
        let start_byte = self.byte_at(from);
        self.text[start_byte..]
            .find(' ')
            .map(|rel| self.char_of_byte(start_byte + rel))
    }

    /// Last space at or before the given character position.
    pub fn space_at_or_before(&self, from: usize) -> Option<usize> {
        let end_byte = self.byte_at(from.saturating_add(1));
        self.text[..end_byte].rfind(' ').map(|b| self.char_of_byte(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_multibyte() {
        let map = CharMap::new("짧은 문장");
        assert_eq!(map.char_len(), 5);
    }

    #[test]
    fn test_slice_by_char_range() {
        let map = CharMap::new("짧은 문장입니다");
        assert_eq!(map.slice(0, 2), "짧은");
        assert_eq!(map.slice(3, 5), "문장");
    }

    #[test]
    fn test_slice_clamps_past_end() {
        let map = CharMap::new("abc");
        assert_eq!(map.slice(1, 100), "bc");
        assert_eq!(map.slice(50, 100), "");
    }

    #[test]
    fn test_char_of_byte_round_trip() {
        let text = "a한b글c";
        let map = CharMap::new(text);
        for (byte, _) in text.char_indices() {
            let char_pos = map.char_of_byte(byte);
            assert_eq!(map.slice(char_pos, char_pos + 1).as_ptr(), text[byte..].as_ptr());
        }
    }

    #[test]
    fn test_space_searches() {
        let map = CharMap::new("한글 텍스트 분할");
        assert_eq!(map.space_at_or_after(0), Some(2));
        assert_eq!(map.space_at_or_after(3), Some(6));
        assert_eq!(map.space_at_or_after(7), None);
        assert_eq!(map.space_at_or_before(5), Some(2));
        assert_eq!(map.space_at_or_before(1), None);
        // from past the end searches the whole text
        assert_eq!(map.space_at_or_before(100), Some(6));
    }

    #[test]
    fn test_space_at_or_before_inclusive() {
        let map = CharMap::new("ab cd");
        assert_eq!(map.space_at_or_before(2), Some(2));
    }
}
