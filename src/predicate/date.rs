//! Date predicates
//!
//! `is_before`, `is_after` and the today-relative checks accept any subject
//! and coerce it through [`Subject::to_datetime`]; a value that cannot be read
//! as a date makes the comparison `false`. `occurs_before` and
//! `occurs_after` are date-gated and take a typed reference instead.
//!
//! "Today" spans from `00:00:00.000` to `23:59:59.999` local time and belongs
//! to neither side: a moment today is neither before nor after today.

use chrono::{NaiveDateTime, NaiveTime};

use crate::diagnostics;
use crate::error::CheckError;
use crate::session::Validator;
use crate::subject::Subject;

/// Midnight at the start of `moment`'s day.
pub fn start_of_day(moment: NaiveDateTime) -> NaiveDateTime {
    moment.date().and_time(NaiveTime::MIN)
}

/// The last millisecond of `moment`'s day.
pub fn end_of_day(moment: NaiveDateTime) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    moment.date().and_time(last)
}

/// `value < reference` after coercing both to dates.
pub fn is_before(value: &Subject, reference: &Subject) -> bool {
    match (value.to_datetime(), reference.to_datetime()) {
        (Some(v), Some(r)) => v < r,
        _ => false,
    }
}

/// `value > reference` after coercing both to dates.
pub fn is_after(value: &Subject, reference: &Subject) -> bool {
    match (value.to_datetime(), reference.to_datetime()) {
        (Some(v), Some(r)) => v > r,
        _ => false,
    }
}

/// Strictly before the start of `now`'s day.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use tributary::Subject;
/// use tributary::predicate::is_before_today;
///
/// let now = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// assert!(is_before_today(&Subject::from("2024-05-01 23:59:59"), now));
/// assert!(!is_before_today(&Subject::from("2024-05-02"), now));
/// ```
pub fn is_before_today(value: &Subject, now: NaiveDateTime) -> bool {
    value
        .to_datetime()
        .is_some_and(|v| v < start_of_day(now))
}

/// Strictly after the end of `now`'s day.
pub fn is_after_today(value: &Subject, now: NaiveDateTime) -> bool {
    value.to_datetime().is_some_and(|v| v > end_of_day(now))
}

fn require_reference(reference: Subject) -> Result<Subject, CheckError> {
    if reference.is_falsy() {
        return Err(diagnostics::invalid_argument(
            "reference",
            "must be defined",
            &reference,
        ));
    }
    Ok(reference)
}

impl Validator {
    /// Subject is earlier than `reference`. Either side may be a date, a
    /// millisecond timestamp or date text.
    ///
    /// An undefined reference (absent, `false`, empty, zero) is an
    /// `InvalidArgument` error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::Validator;
    ///
    /// # fn main() -> Result<(), tributary::CheckError> {
    /// assert!(Validator::new("2016-06-10").is_before("2016-06-11")?.check()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_before(self, reference: impl Into<Subject>) -> Result<Self, CheckError> {
        let reference = require_reference(reference.into())?;
        self.evaluate(|value| is_before(value, &reference))
    }

    /// Subject is later than `reference`. See [`Validator::is_before`].
    pub fn is_after(self, reference: impl Into<Subject>) -> Result<Self, CheckError> {
        let reference = require_reference(reference.into())?;
        self.evaluate(|value| is_after(value, &reference))
    }

    /// Subject falls on a day before today.
    pub fn is_before_today(self) -> Result<Self, CheckError> {
        let now = self.config().now();
        self.evaluate(|value| is_before_today(value, now))
    }

    /// Subject falls on a day after today.
    pub fn is_after_today(self) -> Result<Self, CheckError> {
        let now = self.config().now();
        self.evaluate(|value| is_after_today(value, now))
    }

    /// Date subject strictly earlier than `reference`.
    pub fn occurs_before(self, reference: NaiveDateTime) -> Result<Self, CheckError> {
        self.evaluate_date(|d| d < reference)
    }

    /// Date subject strictly later than `reference`.
    pub fn occurs_after(self, reference: NaiveDateTime) -> Result<Self, CheckError> {
        self.evaluate_date(|d| d > reference)
    }
}
