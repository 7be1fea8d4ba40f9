//! Async wait primitives built on the lenient resolver.
//!
//! [`delay`] resolves a duration expression exactly like
//! [`calc`](crate::calc) and suspends the calling task for that long on
//! the tokio timer. Cancellation is ordinary future dropping; nothing here
//! holds resources across the await point.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() {
//! use delta_time::{delay, delay_with, DelayOutcome};
//!
//! delay("50ms").await;
//! let got: Result<&str, &str> = delay_with("1s", DelayOutcome::Resolve("done")).await;
//! assert_eq!(got, Ok("done"));
//! # }
//! ```

use std::time::Duration;

use tokio::time::sleep;
use tracing::trace;

use crate::parse::{calc, TimeValue};

/// What [`delay_with`] should produce once the wait elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome<T> {
    /// Complete successfully with the value.
    Resolve(T),
    /// Fail with the value.
    Reject(T),
}

/// Wait for the given duration expression.
///
/// The expression is resolved leniently to milliseconds; non-finite or
/// negative totals complete immediately.
pub async fn delay(time: impl Into<TimeValue>) {
    let millis = calc(time);
    trace!(delay_ms = millis, "delay scheduled");
    sleep(to_duration(millis)).await;
}

/// Wait for the given duration expression, then resolve or reject with a
/// value.
///
/// # Errors
///
/// Returns `Err` carrying the value when the outcome is
/// [`DelayOutcome::Reject`]; the timer itself cannot fail.
pub async fn delay_with<T>(
    time: impl Into<TimeValue>,
    outcome: DelayOutcome<T>,
) -> Result<T, T> {
    delay(time).await;
    match outcome {
        DelayOutcome::Resolve(value) => Ok(value),
        DelayOutcome::Reject(value) => Err(value),
    }
}

/// Convert a millisecond total into a timer duration.
///
/// Negative and non-finite totals clamp to zero; totals beyond what
/// `Duration` can hold clamp to `Duration::MAX`.
fn to_duration(millis: f64) -> Duration {
    if !millis.is_finite() || millis <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX)
}
