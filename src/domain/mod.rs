//! Domain layer - thermistor math and configuration
//!
//! Everything here is pure: no ADC, no delays, no clocks. The driver in
//! [`crate::driver`] composes these pieces with the ports.

pub mod config;
pub mod conversion;
pub mod filter;
pub mod lookup_table;
pub mod reading;
pub mod tables;
pub mod units;

pub use config::{ConversionMethod, NtcConfig, NtcType};
pub use conversion::{ConversionError, ConversionResult, SteinhartHartCoefficients};
pub use filter::EmaFilter;
pub use lookup_table::{LookupEntry, LookupError, LookupTable, LookupTableStats};
pub use reading::NtcReading;
pub use tables::lookup_table_for;
