//! The `Outcome` tagged union: a success payload or a failure payload.
//!
//! An `Outcome` is plain data. Producers return it instead of raising, and
//! consumers decide at the call site whether to inspect it, convert it to an
//! `Option`, or unwrap it into a `Result`.

use std::fmt;

use crate::error::UnwrapError;

/// Failure payload of an [`Outcome`].
///
/// Carries a human-readable message and an optional short machine-readable
/// code. Both are fixed at construction; there are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    error: String,
    code: Option<String>,
}

impl Failure {
    /// Create a failure with a message and no code.
    #[inline]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Create a failure with a message and a code.
    ///
    /// An empty code is stored as absent.
    #[inline]
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            error: error.into(),
            code: (!code.is_empty()).then_some(code),
        }
    }

    /// The human-readable message.
    #[inline]
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Alias for [`Failure::error`].
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error
    }

    /// The machine-readable code, if one was supplied.
    #[inline]
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Consume the failure, keeping only the message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> String {
        self.error
    }

    /// Consume the failure into `(message, code)`.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.error, self.code)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.error),
            None => f.write_str(&self.error),
        }
    }
}

impl std::error::Error for Failure {}

/// Either a success value or a [`Failure`].
///
/// Exactly one variant exists per value and it never changes. Access to the
/// payload goes through `match` or the narrowing accessors
/// ([`Outcome::as_ok`], [`Outcome::as_failure`]), so a success value can only
/// be read from `Ok` and a failure only from `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an Outcome may be a failure, which should be handled"]
pub enum Outcome<T> {
    /// Success, carrying the value.
    Ok(T),
    /// Failure, carrying the message and optional code.
    Err(Failure),
}

impl<T> Outcome<T> {
    /// Wrap a success value. Any value is accepted, including `()` and `None`.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Build a failure with a message and no code.
    #[inline]
    pub fn err(message: impl Into<String>) -> Self {
        Self::Err(Failure::new(message))
    }

    /// Build a failure with a message and a code.
    #[inline]
    pub fn err_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Err(Failure::with_code(message, code))
    }

    /// `true` iff this is the success variant.
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// `true` iff this is the failure variant.
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow the success value, if any.
    #[inline]
    #[must_use]
    pub const fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrow the failure, if any.
    #[inline]
    #[must_use]
    pub const fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Ok(_) => None,
            Self::Err(failure) => Some(failure),
        }
    }

    /// Convert into the success value, discarding any failure.
    #[inline]
    #[must_use]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Convert into the failure message, discarding any success value.
    ///
    /// Only the message survives; the code is dropped.
    #[inline]
    #[must_use]
    pub fn into_err_message(self) -> Option<String> {
        self.into_failure().map(Failure::into_message)
    }

    /// Convert into the whole failure payload, code included.
    #[inline]
    #[must_use]
    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Self::Ok(_) => None,
            Self::Err(failure) => Some(failure),
        }
    }

    /// Extract the success value.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] carrying the failure message when this is the
    /// failure variant. The code is not carried over; check
    /// [`Outcome::as_failure`] first if it matters.
    #[inline]
    pub fn unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(failure) => {
                tracing::debug!(
                    error = %failure.error(),
                    code = ?failure.code(),
                    "Unwrapping failed outcome"
                );
                Err(UnwrapError::from(failure))
            }
        }
    }

    /// Extract the success value, or return `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(failure) => {
                tracing::debug!(
                    error = %failure.error(),
                    code = ?failure.code(),
                    "Outcome failed, using default"
                );
                default
            }
        }
    }

    /// Borrow the success value, keeping the failure as-is (cloned).
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(failure) => Outcome::Err(failure.clone()),
        }
    }

    /// Transform the success value.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Chain another fallible step on success.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Perform a side effect on the success value without consuming it.
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Perform a side effect on the failure without consuming it.
    #[inline]
    pub fn inspect_failure<F: FnOnce(&Failure)>(self, f: F) -> Self {
        if let Self::Err(ref failure) = self {
            f(failure);
        }
        self
    }

    /// Convert into a std `Result` keeping the whole failure.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] unchanged when this is the failure variant.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(failure) => Err(failure),
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    #[inline]
    fn from(failure: Failure) -> Self {
        Self::Err(failure)
    }
}

impl<T> From<Result<T, Failure>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(failure) => Self::Err(failure),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
