//! Type guards
//!
//! Pure classifiers used by the gated dispatch wrappers.

use crate::subject::Subject;

/// True when the subject is text.
#[inline]
pub fn is_string(subject: &Subject) -> bool {
    matches!(subject, Subject::Text(_))
}

/// True when the subject is a number (including NaN).
#[inline]
pub fn is_number(subject: &Subject) -> bool {
    matches!(subject, Subject::Number(_))
}

/// True when the subject is a date.
#[inline]
pub fn is_date(subject: &Subject) -> bool {
    matches!(subject, Subject::Date(_))
}

/// True when the subject is a boolean.
#[inline]
pub fn is_boolean(subject: &Subject) -> bool {
    matches!(subject, Subject::Bool(_))
}

/// True when no value was supplied.
#[inline]
pub fn is_absent(subject: &Subject) -> bool {
    matches!(subject, Subject::Absent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards_are_exclusive() {
        let samples = [
            Subject::Absent,
            Subject::from(true),
            Subject::from("a"),
            Subject::from(1),
            Subject::from(chrono::NaiveDateTime::MIN),
        ];
        for s in &samples {
            let hits = [is_absent(s), is_boolean(s), is_string(s), is_number(s), is_date(s)]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(hits, 1, "{:?}", s);
        }
    }

    #[test]
    fn test_nan_is_still_a_number() {
        assert!(is_number(&Subject::from(f64::NAN)));
    }
}
