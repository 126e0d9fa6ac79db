//! Presence predicates
//!
//! These are ungated: any subject may be asked whether it is missing.

use crate::error::CheckError;
use crate::session::Validator;
use crate::subject::Subject;

/// Absent, `false`, or text that trims to nothing.
///
/// Numbers, dates and `true` are never null-like.
///
/// # Example
///
/// ```rust
/// use tributary::Subject;
/// use tributary::predicate::is_null_like;
///
/// assert!(is_null_like(&Subject::Absent));
/// assert!(is_null_like(&Subject::from("   ")));
/// assert!(is_null_like(&Subject::from(false)));
/// assert!(!is_null_like(&Subject::from(0)));
/// ```
pub fn is_null_like(subject: &Subject) -> bool {
    match subject {
        Subject::Absent => true,
        Subject::Bool(b) => !b,
        Subject::Text(s) => s.trim().is_empty(),
        Subject::Number(_) | Subject::Date(_) => false,
    }
}

/// Text that trims to nothing. Anything that is not text is not empty.
pub fn is_empty(subject: &Subject) -> bool {
    subject.as_text().is_some_and(|s| s.trim().is_empty())
}

impl Validator {
    /// See [`is_null_like`].
    pub fn is_null_like(self) -> Result<Self, CheckError> {
        self.evaluate(is_null_like)
    }

    /// See [`is_empty`].
    pub fn is_empty(self) -> Result<Self, CheckError> {
        self.evaluate(is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_null_like_values() {
        assert!(is_null_like(&Subject::Absent));
        assert!(is_null_like(&Subject::from(false)));
        assert!(is_null_like(&Subject::from("")));
        assert!(is_null_like(&Subject::from(" \t\n")));
    }

    #[test]
    fn test_not_null_like_values() {
        assert!(!is_null_like(&Subject::from(true)));
        assert!(!is_null_like(&Subject::from(0)));
        assert!(!is_null_like(&Subject::from(10)));
        assert!(!is_null_like(&Subject::from(" a ")));
        assert!(!is_null_like(&Subject::from(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        )));
    }

    #[test]
    fn test_is_empty_only_for_text() {
        assert!(is_empty(&Subject::from("  ")));
        assert!(!is_empty(&Subject::Absent));
        assert!(!is_empty(&Subject::from(false)));
        assert!(!is_empty(&Subject::from("x")));
    }

    #[test]
    fn test_chain_reuse_with_set_subject() {
        let v = Validator::new(None::<&str>).is_null_like().unwrap();
        assert_eq!(v.check(), Ok(true));
        let v = v.set_subject(10).is_null_like().unwrap();
        assert_eq!(v.check(), Ok(false));
    }

    #[test]
    fn test_ungated_on_any_subject() {
        for s in [Subject::from(1), Subject::from(true), Subject::Absent] {
            assert!(Validator::new(s).is_empty().is_ok());
        }
    }
}
