//! Chain configuration
//!
//! [`CheckConfig`] holds the few knobs a chain consults at evaluation time.
//! It is a plain builder value; attach it with
//! [`Validator::with_config`](crate::Validator::with_config).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tributary::{CheckConfig, Validator};
//!
//! let noon = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let config = CheckConfig::new().with_fixed_now(noon);
//!
//! let passed = Validator::new("2024-02-29")
//!     .with_config(config)
//!     .is_before_today()
//!     .and_then(|v| v.check())
//!     .unwrap();
//! assert!(passed);
//! ```

use chrono::{Local, NaiveDateTime};

/// Default run of spaces that `is_trimmed` rejects.
pub const DEFAULT_MAX_SPACES: usize = 3;

/// Options consulted while a chain evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckConfig {
    default_max_spaces: usize,
    fixed_now: Option<NaiveDateTime>,
}

impl CheckConfig {
    /// Defaults: three spaces, live clock.
    pub fn new() -> Self {
        CheckConfig {
            default_max_spaces: DEFAULT_MAX_SPACES,
            fixed_now: None,
        }
    }

    /// Space run length used by `is_trimmed(None)`.
    ///
    /// Values below two are accepted here and rejected when `is_trimmed`
    /// actually evaluates.
    pub fn with_default_max_spaces(mut self, count: usize) -> Self {
        self.default_max_spaces = count;
        self
    }

    /// Pin "now" for the today-relative date predicates.
    pub fn with_fixed_now(mut self, now: NaiveDateTime) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Return to the system clock.
    pub fn with_live_clock(mut self) -> Self {
        self.fixed_now = None;
        self
    }

    /// Configured default for `is_trimmed`.
    pub fn default_max_spaces(&self) -> usize {
        self.default_max_spaces
    }

    /// Current local wall-clock time, or the pinned instant.
    pub fn now(&self) -> NaiveDateTime {
        self.fixed_now
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.default_max_spaces(), 3);
    }

    #[test]
    fn test_fixed_now() {
        let t = NaiveDate::from_ymd_opt(2020, 5, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let config = CheckConfig::new().with_fixed_now(t);
        assert_eq!(config.now(), t);
        assert_ne!(config.with_live_clock().now(), t);
    }

    #[test]
    fn test_builder_chain() {
        let config = CheckConfig::new().with_default_max_spaces(5);
        assert_eq!(config.default_max_spaces(), 5);
    }
}
