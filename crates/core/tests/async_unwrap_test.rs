//! Async unwrap tests.
//!
//! Tests verify that outcomes produced across an await point unwrap with the
//! same semantics as synchronous outcomes, and that upstream rejections pass
//! through untouched.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use verdict_core::{
    Outcome, OutcomeSource, UnwrapError, UnwrapPromiseError, err, ok, rejected, resolved,
    unwrap_promise, unwrap_promise_or_default,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("connection reset by peer")]
struct ConnectionReset;

async fn fetch_answer() -> Result<Outcome<i32>, Infallible> {
    tokio::task::yield_now().await;
    Ok(ok(42))
}

async fn fetch_failure() -> Result<Outcome<i32>, Infallible> {
    tokio::task::yield_now().await;
    Ok(err("Failed"))
}

async fn fetch_over_broken_link() -> Result<Outcome<i32>, ConnectionReset> {
    tokio::task::yield_now().await;
    Err(ConnectionReset)
}

#[tokio::test]
async fn test_unwrap_promise_resolved_success() {
    let value = unwrap_promise(OutcomeSource::pending(resolved(ok(42)))).await;
    assert_eq!(value, Ok(42));
}

#[tokio::test]
async fn test_unwrap_promise_resolved_failure_raises_message() {
    let result = unwrap_promise(OutcomeSource::pending(resolved(err::<i32>("Failed")))).await;

    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "Failed");
    assert_eq!(error.as_unwrap_error(), Some(&UnwrapError::new("Failed")));
}

#[tokio::test]
async fn test_unwrap_promise_accepts_async_fn() {
    let value = unwrap_promise(OutcomeSource::deferred(fetch_answer)).await;
    assert_eq!(value, Ok(42));
}

#[tokio::test]
async fn test_unwrap_promise_or_default_with_failing_async_fn() {
    let value = unwrap_promise_or_default(OutcomeSource::deferred(fetch_failure), 0).await;
    assert_eq!(value, Ok(0));
}

#[tokio::test]
async fn test_unwrap_promise_or_default_with_success() {
    let value = unwrap_promise_or_default(OutcomeSource::pending(fetch_answer()), 0).await;
    assert_eq!(value, Ok(42));
}

#[tokio::test]
async fn test_rejection_passes_through_unwrap_promise() {
    let result = unwrap_promise(OutcomeSource::deferred(fetch_over_broken_link)).await;

    assert_eq!(result, Err(UnwrapPromiseError::Rejected(ConnectionReset)));
    assert_eq!(result.unwrap_err().to_string(), "connection reset by peer");
}

#[tokio::test]
async fn test_rejection_passes_through_unwrap_promise_or_default() {
    let result = unwrap_promise_or_default(OutcomeSource::deferred(fetch_over_broken_link), 0).await;
    assert_eq!(result, Err(ConnectionReset));
}

#[tokio::test]
async fn test_ready_rejection_is_not_replaced_by_default() {
    let result =
        unwrap_promise_or_default(OutcomeSource::pending(rejected::<i32, _>(ConnectionReset)), 7)
            .await;
    assert_eq!(result, Err(ConnectionReset));
}

#[tokio::test]
async fn test_deferred_producer_runs_once_at_call_time() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let unwrapping = unwrap_promise(OutcomeSource::deferred(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, Infallible>(ok("ready")) }
    }));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(unwrapping.await, Ok("ready"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_independent_unwraps_resolve_in_any_order() {
    let (first_tx, first_rx) = oneshot::channel::<Outcome<&str>>();
    let (second_tx, second_rx) = oneshot::channel::<Outcome<&str>>();

    let first = tokio::spawn(unwrap_promise(OutcomeSource::pending(first_rx)));
    let second = tokio::spawn(unwrap_promise(OutcomeSource::pending(second_rx)));

    second_tx.send(ok("second")).unwrap();
    assert!(matches!(second.await.unwrap(), Ok("second")));

    tokio::time::sleep(Duration::from_millis(5)).await;
    first_tx.send(err("first failed")).unwrap();

    let first = first.await.unwrap().unwrap_err();
    assert_eq!(first.to_string(), "first failed");
    assert!(!first.is_rejected());
}

#[tokio::test]
async fn test_dropped_sender_surfaces_as_rejection() {
    let (tx, rx) = oneshot::channel::<Outcome<u32>>();
    drop(tx);

    let result = unwrap_promise(OutcomeSource::pending(rx)).await;

    assert!(matches!(result, Err(UnwrapPromiseError::Rejected(_))));
}
