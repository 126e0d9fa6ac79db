//! Number predicates
//!
//! All of these are number-gated on a [`Validator`].

use crate::diagnostics;
use crate::error::CheckError;
use crate::session::Validator;
use crate::subject::Subject;

/// `value < limit`.
#[inline]
pub fn less_than(value: f64, limit: f64) -> bool {
    value < limit
}

/// `value > limit`.
#[inline]
pub fn greater_than(value: f64, limit: f64) -> bool {
    value > limit
}

/// `floor <= value <= ceil`.
///
/// # Example
///
/// ```rust
/// use tributary::predicate::between;
///
/// assert!(between(80.0, 80.0, 120.0));
/// assert!(between(120.0, 80.0, 120.0));
/// assert!(!between(120.5, 80.0, 120.0));
/// ```
#[inline]
pub fn between(value: f64, floor: f64, ceil: f64) -> bool {
    value >= floor && value <= ceil
}

impl Validator {
    /// Subject is strictly below `limit`.
    pub fn less_than(self, limit: f64) -> Result<Self, CheckError> {
        self.evaluate_number(|n| less_than(n, limit))
    }

    /// Subject is strictly above `limit`.
    pub fn greater_than(self, limit: f64) -> Result<Self, CheckError> {
        self.evaluate_number(|n| greater_than(n, limit))
    }

    /// Subject lies in `[floor, ceil]`.
    ///
    /// NaN bounds are rejected with `InvalidArgument` before anything else
    /// happens, even if the chain is already decided.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::Validator;
    ///
    /// # fn main() -> Result<(), tributary::CheckError> {
    /// let ok = Validator::new(100).is_between(80.0, 120.0)?.or().less_than(130.0)?.check()?;
    /// assert!(ok);
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_between(self, floor: f64, ceil: f64) -> Result<Self, CheckError> {
        if floor.is_nan() {
            return Err(diagnostics::invalid_argument(
                "floor",
                "must be a number",
                &Subject::Number(floor),
            ));
        }
        if ceil.is_nan() {
            return Err(diagnostics::invalid_argument(
                "ceil",
                "must be a number",
                &Subject::Number(ceil),
            ));
        }
        self.evaluate_number(|n| between(n, floor, ceil))
    }
}
