/// Returns the length in bytes of a UTF-8 encoded character by its leading byte.
#[inline]
pub(crate) fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        // continuation or invalid bytes never lead a character in a valid str
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_agree_with_std() {
        for s in ["a", "ä", "世", "🔥"] {
            assert_eq!(utf8_char_width(s.as_bytes()[0]), s.len(), "{s}");
        }
    }
}
