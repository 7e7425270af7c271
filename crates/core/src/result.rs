//! Extension traits bridging std `Result` and [`Outcome`].
//!
//! Lets fallible std code feed an outcome-returning boundary without
//! hand-written matches at every call site.

use std::fmt::Display;

use crate::outcome::Outcome;

/// Capture a std `Result` as an [`Outcome`].
///
/// The error's `Display` text becomes the failure message.
pub trait IntoOutcome<T> {
    /// Convert, leaving the failure code absent.
    fn into_outcome(self) -> Outcome<T>;

    /// Convert, tagging any failure with `code`.
    fn into_outcome_with_code(self, code: impl Into<String>) -> Outcome<T>;
}

impl<T, E: Display> IntoOutcome<T> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(e) => Outcome::err(e.to_string()),
        }
    }

    #[inline]
    fn into_outcome_with_code(self, code: impl Into<String>) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(e) => Outcome::err_with_code(e.to_string(), code),
        }
    }
}
