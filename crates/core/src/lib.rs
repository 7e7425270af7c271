//! Verdict - tagged success/failure outcomes for Railway-Oriented Programming.
//!
//! An [`Outcome`] is returned instead of raising, so a failure's message and
//! code survive boundaries where raised errors get sanitized (a server
//! handler answering a client, a worker answering its supervisor).
//!
//! # Surface
//!
//! - Producers: [`ok`], [`err`], [`err_with_code`]
//! - Predicates: [`is_ok`], [`is_err`]
//! - Optional extraction: [`option_ok`], [`option_err`]
//! - Unwrap: [`unwrap`], [`unwrap_or_default`]
//! - Async unwrap: [`unwrap_promise`], [`unwrap_promise_or_default`]
//!
//! Unwrapping never panics. It returns [`UnwrapError`], which keeps the failure
//! message and drops the code.
//!
//! # Example
//!
//! ```rust
//! use verdict_core::{Outcome, err_with_code, is_err, ok, unwrap};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32> {
//!     match a.checked_div(b) {
//!         Some(quotient) => ok(quotient),
//!         None => err_with_code("Cannot divide by zero", "DIVISION_BY_ZERO"),
//!     }
//! }
//!
//! assert_eq!(unwrap(divide(10, 2)), Ok(5));
//!
//! let failed = divide(10, 0);
//! assert!(is_err(&failed));
//! if let Outcome::Err(failure) = &failed {
//!     assert_eq!(failure.code(), Some("DIVISION_BY_ZERO"));
//! }
//!
//! let raised = unwrap(failed).unwrap_err();
//! assert_eq!(raised.to_string(), "Cannot divide by zero");
//! ```
//!
//! # Features
//!
//! - `serde` (default): `{"ok": true, "value": ..}` / `{"ok": false, "error": .., "code": ..}`
//!   wire representation.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod error;
mod outcome;
mod promise;
mod railway;
mod result;
#[cfg(feature = "serde")]
mod wire;

pub use error::{UnwrapError, UnwrapPromiseError};
pub use outcome::{Failure, Outcome};
pub use promise::{
    OutcomeSource, rejected, resolved, unwrap_promise, unwrap_promise_or_default,
};
pub use railway::{
    err, err_with_code, is_err, is_ok, ok, option_err, option_ok, unwrap, unwrap_or_default,
};
pub use result::IntoOutcome;
