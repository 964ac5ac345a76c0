//! Adapter implementations for port traits.
//!
//! - `live/` — Real system implementations

pub mod live;
