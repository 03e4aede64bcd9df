//! Temperature reading domain entity
//!
//! A reading is only ever handed out on success, so every field is valid by
//! construction. Failed reads surface as [`crate::NtcError`] instead.

use super::units::{celsius_to_fahrenheit, celsius_to_kelvin};

/// A complete temperature measurement
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NtcReading {
    /// Temperature in Celsius (calibrated and filtered)
    pub temperature_celsius: f32,
    /// Temperature in Fahrenheit
    pub temperature_fahrenheit: f32,
    /// Temperature in Kelvin
    pub temperature_kelvin: f32,
    /// Thermistor resistance in ohms
    pub resistance_ohms: f32,
    /// Divider voltage in volts (averaged)
    pub voltage_volts: f32,
    /// Raw ADC count
    pub adc_raw_value: u32,
    /// Timestamp in microseconds since boot, `0` without a time source
    pub timestamp_us: u64,
    /// Estimated accuracy in Celsius
    pub accuracy_celsius: f32,
}

impl NtcReading {
    /// Build a reading from a Celsius value, deriving the other scales
    pub fn new(
        temperature_celsius: f32,
        resistance_ohms: f32,
        voltage_volts: f32,
        adc_raw_value: u32,
        timestamp_us: u64,
        accuracy_celsius: f32,
    ) -> Self {
        Self {
            temperature_celsius,
            temperature_fahrenheit: celsius_to_fahrenheit(temperature_celsius),
            temperature_kelvin: celsius_to_kelvin(temperature_celsius),
            resistance_ohms,
            voltage_volts,
            adc_raw_value,
            timestamp_us,
            accuracy_celsius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_scales() {
        let reading = NtcReading::new(25.0, 10_000.0, 1.65, 2048, 0, 0.5);
        assert!((reading.temperature_fahrenheit - 77.0).abs() < 1e-4);
        assert!((reading.temperature_kelvin - 298.15).abs() < 1e-3);
        assert_eq!(reading.adc_raw_value, 2048);
    }
}
