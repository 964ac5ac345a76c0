//! Live clock backed by the local timezone and tokio timers.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::ports::clock::{Clock, PauseFuture};

/// Reads the local wall clock and sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn pause(&self, duration: Duration) -> PauseFuture<'_> {
        Box::pin(async move {
            if duration.is_zero() {
                // Lets the runtime poll its drivers so a pending signal is seen.
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(duration).await;
            }
        })
    }
}
