//! Format predicates: phone numbers, email addresses, file extensions
//!
//! All string-gated on a [`Validator`].

use std::sync::LazyLock;

use regex::Regex;

use crate::chars::is_digit_char;
use crate::error::CheckError;
use crate::session::Validator;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email regex is valid")
});

/// Match a phone number against a template such as `xxx-xxxx-xxxx`.
///
/// Digits in the template must appear verbatim; any other character is a
/// placeholder that accepts a single digit. Hyphens separate blocks, and
/// the block count and every block length must agree.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::matches_phone_format;
///
/// assert!(matches_phone_format("010-1111-1111", "xxx-xxxx-xxxx"));
/// assert!(matches_phone_format("010-1111-1111", "010-xxxx-xxxx"));
/// assert!(!matches_phone_format("999-1111-1111", "010-xxxx-xxxx"));
/// assert!(!matches_phone_format("0101-111-1111", "xxx-xxxx-xxxx"));
/// ```
pub fn matches_phone_format(phone: &str, format: &str) -> bool {
    if phone.chars().count() != format.chars().count() {
        return false;
    }
    let phone_blocks: Vec<&str> = phone.split('-').collect();
    let format_blocks: Vec<&str> = format.split('-').collect();
    if phone_blocks.len() != format_blocks.len() {
        return false;
    }

    phone_blocks
        .iter()
        .zip(&format_blocks)
        .all(|(block, format_block)| block_matches(block, format_block))
}

fn block_matches(block: &str, format_block: &str) -> bool {
    let block: Vec<char> = block.chars().collect();
    let format_block: Vec<char> = format_block.chars().collect();
    if block.len() != format_block.len() {
        return false;
    }
    block
        .iter()
        .rev()
        .zip(format_block.iter().rev())
        .all(|(&actual, &expected)| {
            if is_digit_char(expected) {
                actual == expected
            } else {
                is_digit_char(actual)
            }
        })
}

/// Structural email check (no deliverability), case-insensitive.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::is_valid_email_address;
///
/// assert!(is_valid_email_address("ljay189@gmail.com"));
/// assert!(is_valid_email_address("First.Last@Example.ORG"));
/// assert!(!is_valid_email_address("test.jpg"));
/// ```
pub fn is_valid_email_address(input: &str) -> bool {
    EMAIL_REGEX.is_match(&input.to_lowercase())
}

/// The text after the last `.` equals one of the `|`-separated entries in
/// `allowed`. Comparison is case-sensitive; text without a `.` fails.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::has_extension;
///
/// assert!(has_extension("test.jpg", "jpg|png"));
/// assert!(!has_extension("test.JPG", "jpg|png"));
/// assert!(!has_extension("noext", "jpg"));
/// ```
pub fn has_extension(input: &str, allowed: &str) -> bool {
    match input.rsplit_once('.') {
        Some((_, extension)) => allowed.split('|').any(|candidate| candidate == extension),
        None => false,
    }
}

impl Validator {
    /// See [`is_valid_email_address`].
    pub fn is_valid_email_address(self) -> Result<Self, CheckError> {
        self.evaluate_text(is_valid_email_address)
    }

    /// See [`matches_phone_format`].
    pub fn is_valid_phone_no(self, format: &str) -> Result<Self, CheckError> {
        self.evaluate_text(|s| matches_phone_format(s, format))
    }

    /// See [`has_extension`]. `allowed` is a `|`-delimited list, e.g.
    /// `"png|jpg|gif"`.
    pub fn is_valid_extension(self, allowed: &str) -> Result<Self, CheckError> {
        self.evaluate_text(|s| has_extension(s, allowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_phone_placeholders_accept_digits() {
        assert!(matches_phone_format("010-1111-1111", "xxx-xxxx-xxxx"));
        assert!(matches_phone_format("02-123-4567", "xx-xxx-xxxx"));
        assert!(!matches_phone_format("01a-1111-1111", "xxx-xxxx-xxxx"));
    }

    #[test]
    fn test_phone_literal_digits_are_anchors() {
        assert!(matches_phone_format("010-9999-0000", "010-xxxx-xxxx"));
        assert!(!matches_phone_format("999-1111-1111", "010-xxxx-xxxx"));
        assert!(!matches_phone_format("011-1111-1111", "010-xxxx-xxxx"));
    }

    #[test]
    fn test_phone_shape_mismatches() {
        // same total length, different block lengths
        assert!(!matches_phone_format("0101-111-1111", "xxx-xxxx-xxxx"));
        // different total length
        assert!(!matches_phone_format("010-1111-111", "xxx-xxxx-xxxx"));
        // same length, different block count
        assert!(!matches_phone_format("010111111111", "xxx-xxxx-xxx"));
        assert!(!matches_phone_format("asdasd asdasd", "xxx-xxxx-xxxx"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email_address("user@example.com"));
        assert!(is_valid_email_address("a.b-c@sub.example.co.kr"));
        assert!(is_valid_email_address("\"quoted name\"@example.com"));
        assert!(is_valid_email_address("user@[192.168.0.1]"));
        assert!(!is_valid_email_address("user@example"));
        assert!(!is_valid_email_address("user@@example.com"));
        assert!(!is_valid_email_address("us er@example.com"));
        assert!(!is_valid_email_address(""));
    }

    #[test]
    fn test_extension() {
        assert!(has_extension("test.jpg", "jpg|test|png"));
        assert!(has_extension("archive.tar.gz", "gz"));
        assert!(!has_extension("archive.tar.gz", "tar"));
        assert!(!has_extension("noext", "jpg"));
        assert!(has_extension("trailing.", "jpg|"));
    }

    #[test]
    fn test_chain_email_or_empty() {
        let v = Validator::new("")
            .is_valid_email_address()
            .unwrap()
            .or()
            .is_empty()
            .unwrap();
        assert_eq!(v.check(), Ok(true));

        let v = Validator::new("test.jpg").is_valid_email_address().unwrap();
        assert_eq!(v.check(), Ok(false));
        let v = v
            .set_subject("ljay189@gmail.com")
            .or()
            .is_valid_email_address()
            .unwrap();
        assert_eq!(v.check(), Ok(true));
    }

    #[test]
    fn test_format_predicates_are_text_gated() {
        let err = Validator::new(1).is_valid_phone_no("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let err = Validator::new(false).is_valid_extension("jpg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
