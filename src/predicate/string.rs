//! String predicates
//!
//! Every method here is string-gated on a [`Validator`]. Lengths are counted
//! in characters, not bytes.

use crate::chars::{is_alphanumeric_char, is_digit_char, is_korean_char, is_space, is_word_escape_char};
use crate::diagnostics;
use crate::error::CheckError;
use crate::session::Validator;
use crate::subject::Subject;
use crate::text::word_count;

/// Reject text containing a run of `max_spaces` consecutive spaces.
///
/// Fails with `InvalidArgument` when `max_spaces` is below two.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::is_trimmed;
///
/// let text = "Captain teemo     on duty!";
/// assert_eq!(is_trimmed(text, 6), Ok(true));
/// assert_eq!(is_trimmed(text, 4), Ok(false));
/// ```
pub fn is_trimmed(input: &str, max_spaces: usize) -> Result<bool, CheckError> {
    if max_spaces <= 1 {
        return Err(diagnostics::invalid_argument(
            "max space count",
            "must be at least two",
            &Subject::from(max_spaces),
        ));
    }
    let mut run = 0usize;
    for c in input.chars() {
        if c == ' ' {
            run += 1;
            if run >= max_spaces {
                return Ok(false);
            }
        } else {
            run = 0;
        }
    }
    Ok(true)
}

/// Contains at least one space character.
pub fn has_spaces(input: &str) -> bool {
    input.chars().any(is_space)
}

/// Contains at least one of `needles`.
pub fn contains_any<S: AsRef<str>>(input: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| input.contains(n.as_ref()))
}

/// None of the words in `input` occur in the blacklist.
///
/// `input` is cut into words at word-escape characters (space and ASCII
/// punctuation, see [`is_word_escape_char`]). Each word is trimmed and
/// lowercased, and the scan stops at the first word that appears inside any
/// blacklisted entry, compared case-insensitively. Empty words are ignored
/// and the trailing word after the last delimiter is checked as well.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::lacks;
///
/// assert!(lacks("good morning", &["darn"]));
/// assert!(!lacks("well, DARN it", &["darn"]));
/// ```
pub fn lacks<S: AsRef<str>>(input: &str, blacklist: &[S]) -> bool {
    let blacklist: Vec<String> = blacklist
        .iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .collect();
    let blacklisted = |word: &str| {
        let word = word.trim().to_lowercase();
        !word.is_empty() && blacklist.iter().any(|b| b.contains(&word))
    };

    let mut buffer = String::new();
    for c in input.chars() {
        if is_word_escape_char(c) {
            if blacklisted(&buffer) {
                return false;
            }
            buffer.clear();
        } else {
            buffer.push(c);
        }
    }
    !blacklisted(&buffer)
}

/// Character count is `<= max`.
pub fn is_shorter_than(input: &str, max: usize) -> bool {
    input.chars().count() <= max
}

/// Character count is `>= min`.
///
/// The bound is inclusive, mirroring [`is_shorter_than`], so `"abc"` is
/// longer than 3.
pub fn is_longer_than(input: &str, min: usize) -> bool {
    input.chars().count() >= min
}

/// Character count lies in `[floor, ceil]`.
pub fn is_length_between(input: &str, floor: usize, ceil: usize) -> bool {
    let len = input.chars().count();
    len >= floor && len <= ceil
}

/// Word count (see [`crate::text::words`]) is `<= max`.
pub fn less_words_than(input: &str, max: usize) -> bool {
    word_count(input) <= max
}

/// Word count (see [`crate::text::words`]) is `>= min`.
pub fn more_words_than(input: &str, min: usize) -> bool {
    word_count(input) >= min
}

/// Only ASCII letters, digits and spaces.
pub fn is_alphanumeric(input: &str) -> bool {
    input.chars().all(is_alphanumeric_char)
}

/// Only ASCII letters, digits, spaces and Hangul.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::is_korean_alphanumeric;
///
/// assert!(is_korean_alphanumeric("hello 안녕하세요 123"));
/// assert!(!is_korean_alphanumeric("안녕!"));
/// ```
pub fn is_korean_alphanumeric(input: &str) -> bool {
    input
        .chars()
        .all(|c| is_alphanumeric_char(c) || is_korean_char(c))
}

/// A non-negative integer written without sign, fraction or leading zeros.
pub fn is_number_like(input: &str) -> bool {
    !input.is_empty()
        && input.chars().all(is_digit_char)
        && (input == "0" || !input.starts_with('0'))
}

impl Validator {
    /// See [`is_trimmed`]. `None` uses the configured default (three).
    ///
    /// The threshold is validated only when the predicate actually runs.
    pub fn is_trimmed(self, max_spaces: Option<usize>) -> Result<Self, CheckError> {
        let max_spaces = max_spaces.unwrap_or(self.config().default_max_spaces());
        self.evaluate_text(|s| is_trimmed(s, max_spaces))
    }

    /// See [`has_spaces`].
    pub fn has_spaces(self) -> Result<Self, CheckError> {
        self.evaluate_text(has_spaces)
    }

    /// Subject contains `needle`.
    pub fn contains(self, needle: &str) -> Result<Self, CheckError> {
        self.evaluate_text(|s| s.contains(needle))
    }

    /// See [`contains_any`].
    pub fn contains_any<S: AsRef<str>>(self, needles: &[S]) -> Result<Self, CheckError> {
        self.evaluate_text(|s| contains_any(s, needles))
    }

    /// See [`lacks`].
    pub fn lacks<S: AsRef<str>>(self, blacklist: &[S]) -> Result<Self, CheckError> {
        self.evaluate_text(|s| lacks(s, blacklist))
    }

    /// See [`is_shorter_than`].
    pub fn is_shorter_than(self, max: usize) -> Result<Self, CheckError> {
        self.evaluate_text(|s| is_shorter_than(s, max))
    }

    /// See [`is_longer_than`]. Inclusive: passes when the length is `>= min`.
    pub fn is_longer_than(self, min: usize) -> Result<Self, CheckError> {
        self.evaluate_text(|s| is_longer_than(s, min))
    }

    /// See [`is_length_between`].
    pub fn is_length_between(self, floor: usize, ceil: usize) -> Result<Self, CheckError> {
        self.evaluate_text(|s| is_length_between(s, floor, ceil))
    }

    /// See [`less_words_than`].
    pub fn less_words_than(self, max: usize) -> Result<Self, CheckError> {
        self.evaluate_text(|s| less_words_than(s, max))
    }

    /// See [`more_words_than`].
    pub fn more_words_than(self, min: usize) -> Result<Self, CheckError> {
        self.evaluate_text(|s| more_words_than(s, min))
    }

    /// See [`is_alphanumeric`].
    pub fn is_alphanumeric(self) -> Result<Self, CheckError> {
        self.evaluate_text(is_alphanumeric)
    }

    /// See [`is_korean_alphanumeric`].
    pub fn is_korean_alphanumeric(self) -> Result<Self, CheckError> {
        self.evaluate_text(is_korean_alphanumeric)
    }

    /// See [`is_number_like`].
    pub fn is_number_like(self) -> Result<Self, CheckError> {
        self.evaluate_text(is_number_like)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;
    use crate::error::ErrorKind;

    #[test]
    fn test_is_trimmed_thresholds() {
        let text = "Captain teemo     on duty! ㅋㅋㅋㅋ";
        assert_eq!(is_trimmed(text, 6), Ok(true));
        assert_eq!(is_trimmed(text, 5), Ok(false));
        assert_eq!(is_trimmed(text, 4), Ok(false));
        assert_eq!(is_trimmed("a  b", 3), Ok(true));
    }

    #[test]
    fn test_is_trimmed_huge_threshold_passes() {
        assert_eq!(is_trimmed("a b", usize::MAX), Ok(true));
        let v = Validator::new("a b").is_trimmed(Some(usize::MAX)).unwrap();
        assert_eq!(v.check(), Ok(true));
    }

    #[test]
    fn test_is_trimmed_run_at_end_of_input() {
        assert_eq!(is_trimmed("ab   ", 3), Ok(false));
        assert_eq!(is_trimmed("  a  ", 3), Ok(true));
    }

    #[test]
    fn test_is_trimmed_rejects_small_threshold() {
        let err = is_trimmed("a", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_is_trimmed_default_from_config() {
        let v = Validator::new("a   b").is_trimmed(None).unwrap();
        assert_eq!(v.check(), Ok(false));

        let v = Validator::new("a   b")
            .with_config(CheckConfig::new().with_default_max_spaces(4))
            .is_trimmed(None)
            .unwrap();
        assert_eq!(v.check(), Ok(true));
    }

    #[test]
    fn test_is_trimmed_threshold_skipped_when_short_circuited() {
        let v = Validator::new("abc").has_spaces().unwrap();
        assert_eq!(v.check(), Ok(false));
        let v = v.is_trimmed(Some(0)).unwrap();
        assert_eq!(v.check(), Ok(false));

        let err = Validator::new("abc").is_trimmed(Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_has_spaces() {
        assert!(has_spaces("123123 123123"));
        assert!(!has_spaces("1231233"));
        assert!(!has_spaces("tab\there"));
    }

    #[test]
    fn test_contains() {
        let v = Validator::new("user@example.com").contains("@").unwrap();
        assert_eq!(v.check(), Ok(true));
        assert!(contains_any("hello world", &["xyz", "wor"]));
        assert!(!contains_any("hello", &["xyz"]));
        assert!(!contains_any::<&str>("hello", &[]));
    }

    #[test]
    fn test_lacks() {
        let blacklist = ["darn", "heck"];
        assert!(lacks("good morning to you", &blacklist));
        assert!(!lacks("oh heck, no", &blacklist));
        assert!(!lacks("Darn!", &blacklist));
        // trailing word is checked too
        assert!(!lacks("oh heck", &blacklist));
    }

    #[test]
    fn test_lacks_matches_fragments_of_blacklisted_entries() {
        // a word contained in a blacklisted entry counts as a hit
        assert!(!lacks("he said", &["heck"]));
        // punctuation runs produce empty words, which never match
        assert!(lacks("fine... ok?!", &["darn"]));
    }

    #[test]
    fn test_lengths_count_chars() {
        assert!(is_shorter_than("안녕", 2));
        assert!(!is_shorter_than("안녕하", 2));
        assert!(is_longer_than("abc", 3));
        assert!(!is_longer_than("ab", 3));
        assert!(is_length_between("hello", 5, 5));
        assert!(!is_length_between("hello", 6, 10));
    }

    #[test]
    fn test_word_counts() {
        assert!(less_words_than("one two-three", 3));
        assert!(!less_words_than("one two-three four", 3));
        assert!(more_words_than("one two-three", 3));
        assert!(!more_words_than("one two", 3));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc 123 XYZ"));
        assert!(!is_alphanumeric("abc_123"));
        assert!(!is_alphanumeric("안녕"));
    }

    #[test]
    fn test_korean_alphanumeric() {
        assert!(is_korean_alphanumeric("hello 안녕하세요ㅇㅗㅎ 0"));
        assert!(!is_korean_alphanumeric("hello!"));
        assert!(!is_korean_alphanumeric("日本"));
    }

    #[test]
    fn test_korean_chain_with_length() {
        let v = Validator::new("hello 안녕하세요")
            .is_korean_alphanumeric()
            .unwrap()
            .is_length_between(10, 20)
            .unwrap();
        assert_eq!(v.check(), Ok(true));
    }

    #[test]
    fn test_number_like() {
        assert!(is_number_like("10"));
        assert!(is_number_like("0"));
        assert!(!is_number_like("010"));
        assert!(!is_number_like("-1"));
        assert!(!is_number_like("1.5"));
        assert!(!is_number_like(""));
        assert!(!is_number_like("ab"));
    }

    #[test]
    fn test_string_predicates_reject_non_text() {
        let err = Validator::new(None::<&str>).is_alphanumeric().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert!(err.message().contains("null is of type null"));
    }

    #[test]
    fn test_type_mismatch_reports_large_numbers_exactly() {
        let err = Validator::new(1e20).has_spaces().unwrap_err();
        assert_eq!(
            err.message(),
            "input must be of type string, but input 100000000000000000000 is of type number"
        );
    }
}
