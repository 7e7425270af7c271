//! Errors raised when an outcome is unwrapped.
//!
//! Domain failures travel as [`crate::Outcome::Err`] data. These types only
//! appear once a caller explicitly asks to unwrap.

use thiserror::Error;

use crate::outcome::Failure;

/// Raised by `unwrap` on a failed outcome.
///
/// Carries the failure message as its own message. The failure code is not
/// carried; callers that branch on codes inspect the outcome before unwrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Create an unwrap error with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The original failure message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Failure> for UnwrapError {
    #[inline]
    fn from(failure: Failure) -> Self {
        Self::new(failure.into_message())
    }
}

/// Error from unwrapping an asynchronously produced outcome.
///
/// `Rejected` holds the upstream error exactly as the computation returned
/// it. `Failed` holds the message of an outcome that resolved to a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapPromiseError<E> {
    /// The computation itself failed before producing an outcome.
    #[error(transparent)]
    Rejected(E),

    /// The computation produced a failed outcome.
    #[error(transparent)]
    Failed(UnwrapError),
}

impl<E> UnwrapPromiseError<E> {
    /// `true` if the upstream computation rejected.
    #[inline]
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The upstream rejection, if that is what happened.
    #[inline]
    #[must_use]
    pub fn into_rejection(self) -> Option<E> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Failed(_) => None,
        }
    }

    /// The unwrap error, if the computation resolved to a failure.
    #[inline]
    #[must_use]
    pub const fn as_unwrap_error(&self) -> Option<&UnwrapError> {
        match self {
            Self::Rejected(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}
