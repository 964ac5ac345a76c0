//! Clock port: time of day for the timestamp overlay and pacing between images.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::NaiveDateTime;

/// Boxed future type returned by [`Clock::pause`].
pub type PauseFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Source of wall-clock time and of waits between iterations.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Wait for `duration`. A zero duration must still yield to the runtime.
    fn pause(&self, duration: Duration) -> PauseFuture<'_>;
}
