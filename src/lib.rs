//! NTC Thermistor Driver
//!
//! Hardware-agnostic driver for NTC thermistors read through a voltage
//! divider, with beta, Steinhart-Hart and lookup-table conversion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Driver                                       │
//! │  - NtcThermistor: lifecycle, sampling, calibration, filtering   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - conversion: beta / Steinhart-Hart / divider math             │
//! │  - lookup_table + tables: per-part resistance tables            │
//! │  - NtcConfig, NtcReading, EmaFilter                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AdcPort: sample the divider voltage                          │
//! │  - embedded_hal::delay::DelayNs: inter-sample delay             │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - StdDelay: thread::sleep delay (std only)                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut adc = BoardAdc::new(p.ADC);
//! let mut ntc = NtcThermistor::with_type(&mut adc, Delay, NtcType::NtcG163Jft103Ft1S);
//! ntc.initialize()?;
//! let reading = ntc.read_temperature()?;
//! defmt::info!("{} C ({} ohm)", reading.temperature_celsius, reading.resistance_ohms);
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls, [`adapters::StdDelay`] and the `ntc_calc` binary
//! - `defmt`: logging and `defmt::Format` on public types
//! - `serde`: serialize configuration and readings
//! - `embassy-time`: timestamp readings with `embassy_time::Instant`
//! - `extended-beta-range`: accept beta values up to 10 000 K

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod log;

// ============================================================================
// Errors
// ============================================================================

pub mod error;

pub use error::{status_str, NtcError, NtcResult};

// ============================================================================
// Hexagonal Architecture
// ============================================================================

/// Domain layer - pure thermistor math and configuration
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

/// Driver - composes the domain with the ports
pub mod driver;

// Re-export key domain types
pub use domain::{
    ConversionError, ConversionMethod, LookupEntry, LookupError, LookupTable, NtcConfig,
    NtcReading, NtcType, SteinhartHartCoefficients,
};

// Re-export key port traits
pub use ports::{AdcError, AdcPort};

// Re-export the driver
pub use driver::NtcThermistor;

#[cfg(feature = "std")]
pub use adapters::StdDelay;
