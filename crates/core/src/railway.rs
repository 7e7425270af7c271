//! Free-function surface over [`Outcome`].
//!
//! Mirrors the inherent methods so call sites can read as
//! `if is_err(&outcome) { .. }` or `unwrap(fetch())?`.

use crate::error::UnwrapError;
use crate::outcome::Outcome;

/// Wrap a success value.
#[inline]
pub const fn ok<T>(value: T) -> Outcome<T> {
    Outcome::ok(value)
}

/// Build a failure carrying `message` and no code.
///
/// The result is generic over `T`, so it fits any outcome type.
#[inline]
pub fn err<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::err(message)
}

/// Build a failure carrying `message` and a machine-readable `code`.
#[inline]
pub fn err_with_code<T>(message: impl Into<String>, code: impl Into<String>) -> Outcome<T> {
    Outcome::err_with_code(message, code)
}

/// `true` iff `outcome` is a success.
#[inline]
#[must_use]
pub const fn is_ok<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_ok()
}

/// `true` iff `outcome` is a failure.
#[inline]
#[must_use]
pub const fn is_err<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_err()
}

/// The success value, or `None`.
#[inline]
#[must_use]
pub fn option_ok<T>(outcome: Outcome<T>) -> Option<T> {
    outcome.into_ok()
}

/// The failure message, or `None`. The code is not included.
#[inline]
#[must_use]
pub fn option_err<T>(outcome: Outcome<T>) -> Option<String> {
    outcome.into_err_message()
}

/// The success value.
///
/// # Errors
///
/// Returns [`UnwrapError`] with the failure message if `outcome` is a
/// failure. The failure code is dropped.
#[inline]
pub fn unwrap<T>(outcome: Outcome<T>) -> Result<T, UnwrapError> {
    outcome.unwrap()
}

/// The success value, or `default` if `outcome` is a failure.
#[inline]
pub fn unwrap_or_default<T>(outcome: Outcome<T>, default: T) -> T {
    outcome.unwrap_or(default)
}
