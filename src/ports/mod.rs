//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator loop and the
//! outside world. Implementations live in `src/adapters/`.

pub mod clock;

pub use clock::Clock;
