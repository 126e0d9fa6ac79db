//! Character classifiers
//!
//! Per-character tests shared by the string predicates. "Alphanumeric" here
//! is deliberately ASCII-only and admits the space character, so that a
//! sentence of plain words passes.

/// ASCII letter `a-z` or `A-Z`.
#[inline]
pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII letter, ASCII digit, or space.
#[inline]
pub fn is_alphanumeric_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_space(c)
}

/// The space character (U+0020). Tabs and newlines do not count.
#[inline]
pub fn is_space(c: char) -> bool {
    c == ' '
}

/// ASCII digit `0-9`.
#[inline]
pub fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// Hangul syllables, Hangul compatibility jamo or Hangul jamo.
///
/// The compatibility jamo bounds are exclusive on both ends.
///
/// ```
/// use tributary::chars::is_korean_char;
///
/// assert!(is_korean_char('한'));
/// assert!(is_korean_char('ㅋ'));
/// assert!(!is_korean_char('a'));
/// ```
#[inline]
pub fn is_korean_char(c: char) -> bool {
    let code = c as u32;
    (0xAC00..=0xD7A3).contains(&code)
        || (code > 0x3130 && code < 0x318F)
        || (0x1100..=0x11FF).contains(&code)
}

/// Delimiter used when splitting text into words for blacklist scanning:
/// code points 32-47 (space, `!` through `/`) and 58-64 (`:` through `@`).
#[inline]
pub fn is_word_escape_char(c: char) -> bool {
    matches!(c as u32, 32..=47 | 58..=64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_includes_space_only() {
        assert!(is_alphanumeric_char('a'));
        assert!(is_alphanumeric_char('Z'));
        assert!(is_alphanumeric_char('7'));
        assert!(is_alphanumeric_char(' '));
        assert!(!is_alphanumeric_char('\t'));
        assert!(!is_alphanumeric_char('_'));
        assert!(!is_alphanumeric_char('é'));
    }

    #[test]
    fn test_alphabet() {
        assert!(is_alphabet_char('q'));
        assert!(!is_alphabet_char('1'));
    }

    #[test]
    fn test_korean_ranges() {
        assert!(is_korean_char('\u{AC00}'));
        assert!(is_korean_char('\u{D7A3}'));
        assert!(!is_korean_char('\u{D7A4}'));
        assert!(is_korean_char('\u{1100}'));
        assert!(is_korean_char('\u{11FF}'));
        // compatibility jamo bounds are exclusive
        assert!(!is_korean_char('\u{3130}'));
        assert!(is_korean_char('\u{3131}'));
        assert!(is_korean_char('\u{318E}'));
        assert!(!is_korean_char('\u{318F}'));
    }

    #[test]
    fn test_word_escape() {
        for c in [' ', '!', '"', ',', '-', '.', '/', ':', ';', '?', '@'] {
            assert!(is_word_escape_char(c), "{:?}", c);
        }
        for c in ['0', '9', 'a', 'Z', '[', '_', '~'] {
            assert!(!is_word_escape_char(c), "{:?}", c);
        }
    }

    #[test]
    fn test_digit() {
        assert!(is_digit_char('0'));
        assert!(!is_digit_char('x'));
        assert!(!is_digit_char('٣'));
    }
}
