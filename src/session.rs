//! Validation session and the chain evaluation engine
//!
//! A [`Validator`] threads three pieces of state through a chain: the subject,
//! the last boolean result, and the combinator that applies to the *next*
//! predicate. Each chained call consumes the session and hands back the
//! updated one.
//!
//! Evaluation is strictly left to right with short-circuiting:
//!
//! - under AND, a `false` result suppresses the next predicate;
//! - under OR, a `true` result suppresses the next predicate;
//! - after every predicate that actually runs, the combinator returns to AND.
//!
//! So `or()` affects exactly one step.
//!
//! # Examples
//!
//! ```
//! use tributary::Validator;
//!
//! # fn main() -> Result<(), tributary::CheckError> {
//! // "is a valid email OR is empty"
//! let ok = Validator::new("")
//!     .is_valid_email_address()?
//!     .or()
//!     .is_empty()?
//!     .check()?;
//! assert!(ok);
//! # Ok(())
//! # }
//! ```

use crate::config::CheckConfig;
use crate::diagnostics;
use crate::error::{CheckError, ErrorKind};
use crate::subject::Subject;

/// How the next predicate combines with the running result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combinator {
    /// Skip the next predicate if the result is already `false`.
    #[default]
    And,
    /// Skip the next predicate if the result is already `true`.
    Or,
}

/// Something a predicate body can produce.
///
/// Only booleans are valid verdicts. The [`Subject`] impl exists for
/// dynamically typed predicate bodies: anything other than `Subject::Bool`
/// is reported as [`ErrorKind::ContractViolation`].
pub trait Verdict {
    /// Resolve into a boolean or an error.
    fn into_verdict(self) -> Result<bool, CheckError>;
}

impl Verdict for bool {
    #[inline]
    fn into_verdict(self) -> Result<bool, CheckError> {
        Ok(self)
    }
}

impl Verdict for Result<bool, CheckError> {
    #[inline]
    fn into_verdict(self) -> Result<bool, CheckError> {
        self
    }
}

impl Verdict for Subject {
    fn into_verdict(self) -> Result<bool, CheckError> {
        match self {
            Subject::Bool(b) => Ok(b),
            other => Err(diagnostics::contract_violation(&other)),
        }
    }
}

/// A chainable validation session over a single subject.
///
/// Sessions are plain values: clone one to branch a chain, and give each
/// thread its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    subject: Subject,
    result: Option<bool>,
    mode: Combinator,
    config: CheckConfig,
}

impl Validator {
    /// Start a session over `subject` with no result yet and AND mode.
    ///
    /// # Example
    ///
    /// ```
    /// use tributary::{Combinator, Validator};
    ///
    /// let v = Validator::new("hello");
    /// assert_eq!(v.mode(), Combinator::And);
    /// assert_eq!(v.result(), None);
    /// ```
    pub fn new(subject: impl Into<Subject>) -> Self {
        Validator {
            subject: subject.into(),
            result: None,
            mode: Combinator::And,
            config: CheckConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// The value being validated.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Combinator that will apply to the next predicate.
    pub fn mode(&self) -> Combinator {
        self.mode
    }

    /// Last result, or `None` before any predicate has run.
    pub fn result(&self) -> Option<bool> {
        self.result
    }

    /// Validate a different value from here on. The running result is kept
    /// and the combinator returns to AND.
    ///
    /// # Example
    ///
    /// ```
    /// use tributary::Validator;
    ///
    /// # fn main() -> Result<(), tributary::CheckError> {
    /// let v = Validator::new(None::<&str>).is_null_like()?;
    /// assert!(v.check()?);
    ///
    /// let v = v.set_subject(10).is_null_like()?;
    /// assert!(!v.check()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.subject = subject.into();
        self.and()
    }

    /// Combine the next predicate with AND.
    pub fn and(mut self) -> Self {
        self.mode = Combinator::And;
        self
    }

    /// Combine the next predicate with OR. Applies to one predicate only.
    pub fn or(mut self) -> Self {
        self.mode = Combinator::Or;
        self
    }

    /// Whether the next predicate would be skipped.
    pub fn is_short_circuited(&self) -> bool {
        matches!(
            (self.mode, self.result),
            (Combinator::And, Some(false)) | (Combinator::Or, Some(true))
        )
    }

    /// Final verdict of the chain.
    ///
    /// Fails with [`ErrorKind::UninitializedRead`] if no predicate has run.
    pub fn check(&self) -> Result<bool, CheckError> {
        self.result.ok_or_else(|| {
            CheckError::new(
                ErrorKind::UninitializedRead,
                "validation results have not been processed; run at least one predicate before calling check()",
            )
        })
    }

    /// Run a caller-supplied predicate through the engine.
    ///
    /// The predicate is ungated: it sees whatever subject the session holds.
    ///
    /// # Example
    ///
    /// ```
    /// use tributary::{ErrorKind, Subject, Validator};
    ///
    /// let v = Validator::new(7).satisfies(|s| s.as_number() == Some(7.0)).unwrap();
    /// assert!(v.check().unwrap());
    ///
    /// let err = Validator::new(7).satisfies(|_| Subject::from("yes")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ContractViolation);
    /// ```
    pub fn satisfies<V, F>(self, predicate: F) -> Result<Self, CheckError>
    where
        V: Verdict,
        F: FnOnce(&Subject) -> V,
    {
        self.evaluate(predicate)
    }

    /// The engine step: short-circuit or run `predicate`, store the result,
    /// reset the combinator to AND.
    pub(crate) fn evaluate<V, F>(mut self, predicate: F) -> Result<Self, CheckError>
    where
        V: Verdict,
        F: FnOnce(&Subject) -> V,
    {
        if self.is_short_circuited() {
            #[cfg(feature = "tracing")]
            tracing::trace!(mode = ?self.mode, result = ?self.result, "short-circuit: predicate skipped");
            return Ok(self);
        }

        let verdict = predicate(&self.subject).into_verdict()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(mode = ?self.mode, previous = ?self.result, verdict, "predicate evaluated");

        self.result = Some(verdict);
        self.mode = Combinator::And;
        Ok(self)
    }
}
