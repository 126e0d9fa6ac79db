//! Error type raised by validation chains
//!
//! Every chained operation returns `Result<Validator, CheckError>`. An error is
//! fatal to the chain: it is returned immediately and no later predicate runs.
//!
//! # Examples
//!
//! ```
//! use tributary::{ErrorKind, Validator};
//!
//! let err = Validator::new(10).has_spaces().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! assert!(err.message().contains("of type number"));
//! ```

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

/// Classification of a [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The subject does not have the type a gated predicate requires.
    TypeMismatch,
    /// A predicate body produced something other than a boolean.
    ContractViolation,
    /// A predicate parameter is missing or malformed.
    InvalidArgument,
    /// `check()` was called before any predicate ran.
    UninitializedRead,
}

impl ErrorKind {
    /// Short lowercase name, used as the message prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::ContractViolation => "contract violation",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::UninitializedRead => "uninitialized read",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic carrying a formatted message and the call stack captured
/// where it was raised.
///
/// The backtrace follows `RUST_BACKTRACE`; when capturing is disabled it is
/// simply empty. Two errors compare equal when kind and message match.
#[derive(Debug, Clone)]
pub struct CheckError {
    kind: ErrorKind,
    message: String,
    backtrace: Arc<Backtrace>,
}

impl CheckError {
    /// Create an error and capture the current call stack.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %kind, %message, "validation diagnostic raised");

        CheckError {
            kind,
            message,
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable description, including the offending value.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Call stack captured when the error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl PartialEq for CheckError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for CheckError {}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CheckError {}
