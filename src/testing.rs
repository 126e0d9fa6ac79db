//! Testing helpers for validation chains
//!
//! Assertion macros that take the `Result<Validator, CheckError>` a chain
//! ends in, so tests can skip the `?`/`check()` boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use tributary::{assert_check_error, assert_fails, assert_passes, ErrorKind, Validator};
//!
//! assert_passes!(Validator::new("test.jpg").is_valid_extension("jpg|png"));
//! assert_fails!(Validator::new("noext").is_valid_extension("jpg"));
//! assert_check_error!(Validator::new(1).has_spaces(), ErrorKind::TypeMismatch);
//! ```

/// Assert that a chain evaluated to `true`.
///
/// Panics if the chain errored or its verdict is `false`.
///
/// # Example
///
/// ```rust
/// use tributary::{assert_passes, Validator};
///
/// assert_passes!(Validator::new(100).is_between(80.0, 120.0));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($chain:expr) => {
        match $chain {
            Ok(validator) => match $crate::Validator::check(&validator) {
                Ok(true) => {}
                Ok(false) => panic!("Expected chain to pass, got false: {:?}", validator),
                Err(e) => panic!("Expected chain to pass, got error: {}", e),
            },
            Err(e) => panic!("Expected chain to pass, got error: {}", e),
        }
    };
}

/// Assert that a chain evaluated to `false`.
///
/// Panics if the chain errored or its verdict is `true`.
#[macro_export]
macro_rules! assert_fails {
    ($chain:expr) => {
        match $chain {
            Ok(validator) => match $crate::Validator::check(&validator) {
                Ok(false) => {}
                Ok(true) => panic!("Expected chain to fail, got true: {:?}", validator),
                Err(e) => panic!("Expected chain to fail, got error: {}", e),
            },
            Err(e) => panic!("Expected chain to fail, got error: {}", e),
        }
    };
}

/// Assert that a chain raised an error of the given [`ErrorKind`](crate::ErrorKind).
#[macro_export]
macro_rules! assert_check_error {
    ($chain:expr, $kind:expr) => {
        match $chain {
            Err(e) => {
                assert_eq!($crate::CheckError::kind(&e), $kind, "unexpected error: {}", e);
            }
            Ok(validator) => {
                panic!("Expected error {:?}, got Ok: {:?}", $kind, validator);
            }
        }
    };
}
