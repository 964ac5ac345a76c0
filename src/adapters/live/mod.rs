//! Live adapters backed by the operating system.

pub mod system_clock;
