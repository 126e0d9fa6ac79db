//! The value under validation
//!
//! A [`Subject`] is a tagged union over everything a chain can be asked to
//! validate. Type-gated predicates classify it with exhaustive matching via
//! [`Subject::kind`].
//!
//! # Examples
//!
//! ```
//! use tributary::{Subject, SubjectKind};
//!
//! assert_eq!(Subject::from("hello").kind(), SubjectKind::Text);
//! assert_eq!(Subject::from(42).kind(), SubjectKind::Number);
//! assert_eq!(Subject::from(None::<&str>).kind(), SubjectKind::Absent);
//! ```

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fmt;

/// A value that can be validated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subject {
    /// No value (`null` / `undefined` in form input).
    #[default]
    Absent,
    /// A boolean; `false` counts as null-like.
    Bool(bool),
    /// A string.
    Text(String),
    /// A number.
    Number(f64),
    /// A local wall-clock timestamp.
    Date(NaiveDateTime),
}

/// Runtime classification of a [`Subject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubjectKind {
    /// [`Subject::Absent`]
    Absent,
    /// [`Subject::Bool`]
    Boolean,
    /// [`Subject::Text`]
    Text,
    /// [`Subject::Number`]
    Number,
    /// [`Subject::Date`]
    Date,
}

impl SubjectKind {
    /// Name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            SubjectKind::Absent => "null",
            SubjectKind::Boolean => "boolean",
            SubjectKind::Text => "string",
            SubjectKind::Number => "number",
            SubjectKind::Date => "date",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Subject {
    /// Classify this subject.
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Absent => SubjectKind::Absent,
            Subject::Bool(_) => SubjectKind::Boolean,
            Subject::Text(_) => SubjectKind::Text,
            Subject::Number(_) => SubjectKind::Number,
            Subject::Date(_) => SubjectKind::Date,
        }
    }

    /// The string payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Subject::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Subject::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The timestamp payload, if this is a date.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Subject::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Whether the value counts as "not provided" when used as a parameter:
    /// absent, `false`, empty text, zero or NaN.
    pub fn is_falsy(&self) -> bool {
        match self {
            Subject::Absent => true,
            Subject::Bool(b) => !b,
            Subject::Text(s) => s.is_empty(),
            Subject::Number(n) => *n == 0.0 || n.is_nan(),
            Subject::Date(_) => false,
        }
    }

    /// Coerce into a timestamp for date comparisons.
    ///
    /// Dates pass through, numbers are milliseconds since the Unix epoch and
    /// text is parsed as RFC 3339, `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD` (local midnight).
    /// Anything else yields `None`, which makes every comparison false.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Subject::Date(d) => Some(*d),
            Subject::Number(ms) if ms.is_finite() => {
                DateTime::from_timestamp_millis(*ms as i64)
                    .map(|utc| utc.with_timezone(&Local).naive_local())
            }
            Subject::Text(s) => parse_datetime(s.trim()),
            _ => None,
        }
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

// 2^53; whole numbers at or beyond this print through `f64` formatting.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Absent => f.write_str("null"),
            Subject::Bool(b) => write!(f, "{}", b),
            Subject::Text(s) => f.write_str(s),
            Subject::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                write!(f, "{}", *n as i64)
            }
            Subject::Number(n) => write!(f, "{}", n),
            Subject::Date(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S%.3f")),
        }
    }
}

impl From<&str> for Subject {
    fn from(value: &str) -> Self {
        Subject::Text(value.to_string())
    }
}

impl From<String> for Subject {
    fn from(value: String) -> Self {
        Subject::Text(value)
    }
}

impl From<&String> for Subject {
    fn from(value: &String) -> Self {
        Subject::Text(value.clone())
    }
}

impl From<bool> for Subject {
    fn from(value: bool) -> Self {
        Subject::Bool(value)
    }
}

impl From<f64> for Subject {
    fn from(value: f64) -> Self {
        Subject::Number(value)
    }
}

impl From<f32> for Subject {
    fn from(value: f32) -> Self {
        Subject::Number(value as f64)
    }
}

impl From<i32> for Subject {
    fn from(value: i32) -> Self {
        Subject::Number(value as f64)
    }
}

impl From<i64> for Subject {
    fn from(value: i64) -> Self {
        Subject::Number(value as f64)
    }
}

impl From<u32> for Subject {
    fn from(value: u32) -> Self {
        Subject::Number(value as f64)
    }
}

impl From<usize> for Subject {
    fn from(value: usize) -> Self {
        Subject::Number(value as f64)
    }
}

impl From<NaiveDateTime> for Subject {
    fn from(value: NaiveDateTime) -> Self {
        Subject::Date(value)
    }
}

impl From<NaiveDate> for Subject {
    fn from(value: NaiveDate) -> Self {
        Subject::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<DateTime<Local>> for Subject {
    fn from(value: DateTime<Local>) -> Self {
        Subject::Date(value.naive_local())
    }
}

impl<T: Into<Subject>> From<Option<T>> for Subject {
    fn from(value: Option<T>) -> Self {
        value.map_or(Subject::Absent, Into::into)
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Subject {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Subject::Absent),
            any::<bool>().prop_map(Subject::Bool),
            any::<String>().prop_map(Subject::Text),
            (-1.0e9f64..1.0e9).prop_map(Subject::Number),
            (0i64..4_000_000_000_000).prop_map(|ms| {
                Subject::Date(
                    DateTime::from_timestamp_millis(ms)
                        .unwrap_or_default()
                        .naive_utc(),
                )
            }),
        ]
        .boxed()
    }
}
