//! The predicate library
//!
//! Every check exists twice: as a pure function over the raw value, and as a
//! chained method on [`Validator`](crate::Validator) that routes through the
//! evaluation engine (with type gating where the check needs a specific
//! subject type).
//!
//! # Example
//!
//! ```rust
//! use tributary::predicate::*;
//!
//! assert!(matches_phone_format("010-1234-5678", "010-xxxx-xxxx"));
//! assert!(has_extension("photo.png", "jpg|png"));
//! assert!(between(5.0, 1.0, 10.0));
//! ```

mod date;
mod format;
mod number;
mod presence;
mod string;

pub use presence::{is_empty, is_null_like};

pub use date::{end_of_day, is_after, is_after_today, is_before, is_before_today, start_of_day};

pub use number::{between, greater_than, less_than};

pub use string::{
    contains_any, has_spaces, is_alphanumeric, is_korean_alphanumeric, is_length_between,
    is_longer_than, is_number_like, is_shorter_than, is_trimmed, lacks, less_words_than,
    more_words_than,
};

pub use format::{has_extension, is_valid_email_address, matches_phone_format};
