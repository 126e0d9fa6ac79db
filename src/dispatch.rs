//! Type-gated dispatch
//!
//! Gated predicates check the subject's type *before* the engine decides
//! whether to short-circuit, so a type error is never hidden by an earlier
//! result.

use chrono::NaiveDateTime;

use crate::diagnostics;
use crate::error::CheckError;
use crate::guards;
use crate::session::{Validator, Verdict};
use crate::subject::{Subject, SubjectKind};

fn gate(subject: &Subject, expected: SubjectKind, guard: fn(&Subject) -> bool) -> Result<(), CheckError> {
    if guard(subject) {
        Ok(())
    } else {
        Err(diagnostics::type_mismatch(expected, subject))
    }
}

impl Validator {
    /// Run a predicate that requires a text subject.
    pub(crate) fn evaluate_text<V, F>(self, predicate: F) -> Result<Self, CheckError>
    where
        V: Verdict,
        F: FnOnce(&str) -> V,
    {
        gate(self.subject(), SubjectKind::Text, guards::is_string)?;
        self.evaluate(|subject| match subject {
            Subject::Text(s) => predicate(s).into_verdict(),
            other => Err(diagnostics::type_mismatch(SubjectKind::Text, other)),
        })
    }

    /// Run a predicate that requires a numeric subject.
    pub(crate) fn evaluate_number<V, F>(self, predicate: F) -> Result<Self, CheckError>
    where
        V: Verdict,
        F: FnOnce(f64) -> V,
    {
        gate(self.subject(), SubjectKind::Number, guards::is_number)?;
        self.evaluate(|subject| match subject {
            Subject::Number(n) => predicate(*n).into_verdict(),
            other => Err(diagnostics::type_mismatch(SubjectKind::Number, other)),
        })
    }

    /// Run a predicate that requires a date subject.
    pub(crate) fn evaluate_date<V, F>(self, predicate: F) -> Result<Self, CheckError>
    where
        V: Verdict,
        F: FnOnce(NaiveDateTime) -> V,
    {
        gate(self.subject(), SubjectKind::Date, guards::is_date)?;
        self.evaluate(|subject| match subject {
            Subject::Date(d) => predicate(*d).into_verdict(),
            other => Err(diagnostics::type_mismatch(SubjectKind::Date, other)),
        })
    }
}
