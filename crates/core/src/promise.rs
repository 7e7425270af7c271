//! Unwrapping outcomes produced by asynchronous computations.
//!
//! A pending outcome is any future yielding `Result<Outcome<T>, E>`:
//!
//! - `Ok(outcome)`: the computation resolved and produced an outcome
//! - `Err(e)`: the computation rejected before producing one
//!
//! The unwrap functions only interpret the outcome. A rejection is handed back
//! exactly as the computation returned it.

use std::convert::Infallible;
use std::future::{self, Future, Ready};

use crate::error::UnwrapPromiseError;
use crate::outcome::Outcome;

/// Where a pending outcome comes from.
///
/// Either a computation that is already pending, or a zero-argument producer
/// that creates one. A producer is invoked exactly once, when the source is
/// started.
#[derive(Debug, Clone)]
pub enum OutcomeSource<Fut, P = fn() -> Fut> {
    /// An already pending computation.
    Pending(Fut),
    /// A producer of the computation.
    Deferred(P),
}

impl<Fut> OutcomeSource<Fut> {
    /// Wrap an already pending computation.
    #[inline]
    pub const fn pending(computation: Fut) -> Self {
        Self::Pending(computation)
    }
}

impl<Fut, P> OutcomeSource<Fut, P>
where
    P: FnOnce() -> Fut,
{
    /// Wrap a producer of the computation.
    #[inline]
    pub const fn deferred(producer: P) -> Self {
        Self::Deferred(producer)
    }

    /// Obtain the computation, invoking the producer if there is one.
    #[inline]
    pub fn start(self) -> Fut {
        match self {
            Self::Pending(computation) => computation,
            Self::Deferred(producer) => producer(),
        }
    }
}

/// A computation that has already resolved to `outcome`.
#[inline]
pub fn resolved<T>(outcome: Outcome<T>) -> Ready<Result<Outcome<T>, Infallible>> {
    future::ready(Ok(outcome))
}

/// A computation that has already rejected with `error`.
#[inline]
pub fn rejected<T, E>(error: E) -> Ready<Result<Outcome<T>, E>> {
    future::ready(Err(error))
}

/// Await the source's outcome and unwrap it.
///
/// The source is started before this function returns, so a deferred
/// producer runs immediately and exactly once. The returned future has a
/// single suspension point: awaiting the computation.
///
/// # Errors
///
/// - [`UnwrapPromiseError::Rejected`] with the computation's own error,
///   unchanged, if it rejects
/// - [`UnwrapPromiseError::Failed`] with the failure message (code dropped)
///   if it resolves to a failed outcome
pub fn unwrap_promise<T, E, Fut, P>(
    source: OutcomeSource<Fut, P>,
) -> impl Future<Output = Result<T, UnwrapPromiseError<E>>>
where
    Fut: Future<Output = Result<Outcome<T>, E>>,
    P: FnOnce() -> Fut,
{
    let computation = source.start();
    async move {
        match computation.await {
            Ok(outcome) => outcome.unwrap().map_err(UnwrapPromiseError::Failed),
            Err(rejection) => {
                tracing::debug!("Pending outcome rejected before resolving");
                Err(UnwrapPromiseError::Rejected(rejection))
            }
        }
    }
}

/// Await the source's outcome, substituting `default` for a failure.
///
/// Starts the source immediately, like [`unwrap_promise`].
///
/// # Errors
///
/// Returns the computation's own error, unchanged, if it rejects. A resolved
/// failure is never an error here.
pub fn unwrap_promise_or_default<T, E, Fut, P>(
    source: OutcomeSource<Fut, P>,
    default: T,
) -> impl Future<Output = Result<T, E>>
where
    Fut: Future<Output = Result<Outcome<T>, E>>,
    P: FnOnce() -> Fut,
{
    let computation = source.start();
    async move {
        match computation.await {
            Ok(outcome) => Ok(outcome.unwrap_or(default)),
            Err(rejection) => {
                tracing::debug!("Pending outcome rejected before resolving, default not applied");
                Err(rejection)
            }
        }
    }
}
