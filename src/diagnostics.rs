//! Diagnostic message construction
//!
//! Messages are assembled from fragments: literal text and rendered subject
//! values. A value is rendered with its `Display` form, except that empty text
//! is shown as `<empty>` so it stays visible inside a sentence.

use crate::error::{CheckError, ErrorKind};
use crate::subject::{Subject, SubjectKind};

/// Incrementally built diagnostic message.
///
/// # Example
///
/// ```
/// use tributary::diagnostics::Diagnostic;
/// use tributary::{ErrorKind, Subject};
///
/// let err = Diagnostic::new()
///     .text("input ")
///     .value(&Subject::from(10))
///     .text(" is of type ")
///     .kind(Subject::from(10).kind())
///     .raise(ErrorKind::TypeMismatch);
/// assert_eq!(err.message(), "input 10 is of type number");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    /// Start an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn text(mut self, text: &str) -> Self {
        self.message.push_str(text);
        self
    }

    /// Append a rendered value.
    pub fn value(mut self, subject: &Subject) -> Self {
        match subject {
            Subject::Text(s) if s.is_empty() => self.message.push_str("<empty>"),
            other => self.message.push_str(&other.to_string()),
        }
        self
    }

    /// Append a type name.
    pub fn kind(mut self, kind: SubjectKind) -> Self {
        self.message.push_str(kind.name());
        self
    }

    /// The message assembled so far.
    pub fn as_str(&self) -> &str {
        &self.message
    }

    /// Turn the message into an error of the given kind.
    pub fn raise(self, kind: ErrorKind) -> CheckError {
        CheckError::new(kind, self.message)
    }
}

/// The subject does not have the type a gated predicate needs.
pub fn type_mismatch(expected: SubjectKind, actual: &Subject) -> CheckError {
    Diagnostic::new()
        .text("input must be of type ")
        .kind(expected)
        .text(", but input ")
        .value(actual)
        .text(" is of type ")
        .kind(actual.kind())
        .raise(ErrorKind::TypeMismatch)
}

/// A predicate produced a non-boolean value.
pub fn contract_violation(produced: &Subject) -> CheckError {
    Diagnostic::new()
        .text("predicate result must be of type boolean, but result ")
        .value(produced)
        .text(" is of type ")
        .kind(produced.kind())
        .raise(ErrorKind::ContractViolation)
}

/// A parameter failed its precondition.
pub fn invalid_argument(name: &str, requirement: &str, given: &Subject) -> CheckError {
    Diagnostic::new()
        .text(name)
        .text(" ")
        .text(requirement)
        .text(", got ")
        .value(given)
        .text(" of type ")
        .kind(given.kind())
        .raise(ErrorKind::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_names_both_types() {
        let err = type_mismatch(SubjectKind::Text, &Subject::from(42));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.message(),
            "input must be of type string, but input 42 is of type number"
        );
    }

    #[test]
    fn test_contract_violation_names_produced_type() {
        let err = contract_violation(&Subject::from("yes"));
        assert_eq!(err.kind(), ErrorKind::ContractViolation);
        assert!(err.message().ends_with("result yes is of type string"));
    }

    #[test]
    fn test_empty_text_is_visible() {
        let msg = Diagnostic::new().text("[").value(&Subject::from("")).text("]");
        assert_eq!(msg.as_str(), "[<empty>]");
    }

    #[test]
    fn test_invalid_argument_format() {
        let err = invalid_argument("floor", "must be a number", &Subject::from(f64::NAN));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "floor must be a number, got NaN of type number");
    }
}
