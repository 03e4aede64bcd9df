//! Ports (interfaces) defining the boundaries of the driver
//!
//! The driver depends on hardware only through these traits, so it can run
//! against a real ADC on target or a scripted mock in host tests.
//!
//! - **AdcPort**: how the divider voltage is sampled (on-chip ADC, SPI ADC, mock)
//!
//! Blocking delays come from `embedded_hal::delay::DelayNs` directly.

pub mod adc;

pub use adc::{AdcError, AdcPort};
