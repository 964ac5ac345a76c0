//! Service context that bundles all port trait objects.

use crate::adapters::live::system_clock::SystemClock;
use crate::ports::Clock;

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Wall clock and pacing port.
    pub clock: Box<dyn Clock>,
}

impl ServiceContext {
    /// Create a context backed by the system clock.
    #[must_use]
    pub fn live() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a context around an explicit clock.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }
}
