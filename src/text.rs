//! Text utilities: word tokenizing and UTF-8 byte length estimation
//!
//! # Examples
//!
//! ```
//! use tributary::text::{byte_length, words};
//!
//! assert_eq!(words("state-of-the-art design"), vec!["state", "of", "the", "art", "design"]);
//! assert_eq!(byte_length("test하하"), 10);
//! ```

/// Split text into words on spaces, then split every piece again on hyphens.
///
/// Empty pieces are kept, so runs of separators produce empty words and the
/// empty string is a single (empty) word.
pub fn words(input: &str) -> Vec<&str> {
    input
        .split(' ')
        .flat_map(|piece| piece.split('-'))
        .collect()
}

/// Number of words as counted by [`words`].
pub fn word_count(input: &str) -> usize {
    input.split(' ').map(|piece| piece.split('-').count()).sum()
}

/// Byte length of `input` when encoded as UTF-8, computed from its UTF-16
/// code units.
///
/// For a Rust string this always agrees with [`str::len`]; the UTF-16 form
/// [`byte_length_utf16`] is what callers holding UTF-16 buffers use.
pub fn byte_length(input: &str) -> usize {
    let units: Vec<u16> = input.encode_utf16().collect();
    byte_length_utf16(&units)
}

/// Estimate the UTF-8 byte length of a UTF-16 buffer.
///
/// Walks from the end: units above `0x7F` add one byte, above `0x7FF` add two.
/// A trailing (low) surrogate consumes its leading surrogate too, so a pair
/// counts as four bytes in total.
pub fn byte_length_utf16(units: &[u16]) -> usize {
    let mut total = units.len();
    let mut i = units.len();
    while i > 0 {
        i -= 1;
        let code = units[i];
        if code > 0x7F && code <= 0x7FF {
            total += 1;
        } else if code > 0x7FF {
            total += 2;
        }
        if (0xDC00..=0xDFFF).contains(&code) && i > 0 {
            i -= 1;
        }
    }
    total
}
