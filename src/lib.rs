//! # Tributary
//!
//! Fluent, chainable validation of a single value.
//!
//! Wrap a subject in a [`Validator`], attach checks one after another, and
//! read the verdict with [`Validator::check`]. Checks combine left to right
//! with short-circuiting AND, and [`Validator::or`] turns the *next* check
//! into an OR:
//!
//! ```rust
//! use tributary::Validator;
//!
//! # fn main() -> Result<(), tributary::CheckError> {
//! // valid email OR empty
//! let ok = Validator::new("someone@example.com")
//!     .is_valid_email_address()?
//!     .or()
//!     .is_empty()?
//!     .check()?;
//! assert!(ok);
//!
//! // has spaces AND (nothing else runs once the result is false)
//! let ok = Validator::new("nospaces").has_spaces()?.is_alphanumeric()?.check()?;
//! assert!(!ok);
//! # Ok(())
//! # }
//! ```
//!
//! Checks that need a particular type of subject (string, number or date)
//! fail with [`ErrorKind::TypeMismatch`] when given anything else, even if
//! the chain has already been decided:
//!
//! ```rust
//! use tributary::{ErrorKind, Validator};
//!
//! let err = Validator::new(42).is_alphanumeric().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! ```
//!
//! The same checks are available as plain functions in [`predicate`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chars;
pub mod config;
pub mod diagnostics;
mod dispatch;
pub mod error;
pub mod guards;
pub mod predicate;
pub mod session;
pub mod subject;
pub mod testing;
pub mod text;

// Re-exports
pub use config::CheckConfig;
pub use error::{CheckError, ErrorKind};
pub use session::{Combinator, Validator, Verdict};
pub use subject::{Subject, SubjectKind};
pub use text::byte_length;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CheckConfig;
    pub use crate::error::{CheckError, ErrorKind};
    pub use crate::session::{Combinator, Validator, Verdict};
    pub use crate::subject::{Subject, SubjectKind};
}
