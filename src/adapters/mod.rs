//! Adapters - concrete implementations for the driver's dependencies
//!
//! # Available Adapters
//!
//! - **std_delay**: `DelayNs` backed by `std::thread::sleep` (host builds)

#[cfg(feature = "std")]
pub mod std_delay;

#[cfg(feature = "std")]
pub use std_delay::StdDelay;
