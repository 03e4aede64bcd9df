//! Thermistor configuration
//!
//! [`NtcConfig`] is a plain value: the caller builds one (usually from a
//! per-part factory), tweaks fields, and hands a copy to the driver. The
//! driver only activates configurations that pass [`NtcConfig::validate`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::conversion::validate_beta_value;
use crate::error::NtcError;

/// Supported thermistor parts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NtcType {
    /// Unknown part
    #[default]
    Unknown,
    /// Murata NTCG163JFT103FT1S (10 kΩ, β = 3435 K)
    NtcG163Jft103Ft1S,
    /// Murata NTCG164JF103FT1S (10 kΩ, β = 3435 K)
    NtcG164Jf103Ft1S,
    /// Murata NTCG163JF103FT1S (10 kΩ, β = 3435 K)
    NtcG163Jf103Ft1S,
    /// User-characterized part; set `resistance_at_25c` and `beta_value`
    Custom,
}

impl NtcType {
    /// Part number as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            NtcType::Unknown => "Unknown",
            NtcType::NtcG163Jft103Ft1S => "NTCG163JFT103FT1S",
            NtcType::NtcG164Jf103Ft1S => "NTCG164JF103FT1S",
            NtcType::NtcG163Jf103Ft1S => "NTCG163JF103FT1S",
            NtcType::Custom => "Custom",
        }
    }

    /// Parse a part number (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        [
            NtcType::Unknown,
            NtcType::NtcG163Jft103Ft1S,
            NtcType::NtcG164Jf103Ft1S,
            NtcType::NtcG163Jf103Ft1S,
            NtcType::Custom,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    /// Nominal (resistance at 25 °C, beta) for catalogued parts
    pub const fn nominal_characteristics(&self) -> Option<(f32, f32)> {
        match self {
            NtcType::NtcG163Jft103Ft1S | NtcType::NtcG164Jf103Ft1S | NtcType::NtcG163Jf103Ft1S => {
                Some((10_000.0, 3435.0))
            }
            NtcType::Custom | NtcType::Unknown => None,
        }
    }
}

/// How resistance is turned into temperature
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionMethod {
    /// Interpolate in the part's compiled-in table, beta model if there is none
    LookupTable,
    /// Beta model
    Mathematical,
    /// Currently the same as [`ConversionMethod::Mathematical`]
    #[default]
    Auto,
}

impl ConversionMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConversionMethod::LookupTable => "Lookup Table",
            ConversionMethod::Mathematical => "Mathematical",
            ConversionMethod::Auto => "Auto",
        }
    }
}

/// Default configuration values
pub mod defaults {
    pub const RESISTANCE_AT_25C: f32 = 10_000.0;
    pub const BETA_VALUE: f32 = 3435.0;
    pub const REFERENCE_VOLTAGE: f32 = 3.3;
    pub const SERIES_RESISTANCE: f32 = 10_000.0;
    pub const CALIBRATION_OFFSET: f32 = 0.0;
    pub const ADC_CHANNEL: u8 = 0;
    pub const ADC_RESOLUTION_BITS: u8 = 12;
    pub const SAMPLE_COUNT: u32 = 1;
    pub const SAMPLE_DELAY_MS: u32 = 0;
    pub const MIN_TEMPERATURE: f32 = -40.0;
    pub const MAX_TEMPERATURE: f32 = 125.0;
    pub const ENABLE_FILTERING: bool = false;
    pub const FILTER_ALPHA: f32 = 0.1;
}

/// Thermistor and measurement-chain configuration
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NtcConfig {
    /// Thermistor part
    pub ntc_type: NtcType,
    /// Resistance at 25 °C (Ω)
    pub resistance_at_25c: f32,
    /// Beta value (K)
    pub beta_value: f32,
    /// Divider supply voltage (V)
    pub reference_voltage: f32,
    /// Series resistor of the divider (Ω)
    pub series_resistance: f32,
    /// Added to every converted temperature (°C)
    pub calibration_offset: f32,
    pub conversion_method: ConversionMethod,
    pub adc_channel: u8,
    pub adc_resolution_bits: u8,
    /// Samples averaged per reading (at least 1)
    pub sample_count: u32,
    /// Blocking delay between consecutive samples (ms)
    pub sample_delay_ms: u32,
    /// Lowest valid reading (°C)
    pub min_temperature: f32,
    /// Highest valid reading (°C)
    pub max_temperature: f32,
    /// Exponential moving average on readings
    pub enable_filtering: bool,
    /// EMA weight of the newest reading, in `[0, 1]`
    pub filter_alpha: f32,
}

impl NtcConfig {
    /// Default configuration for the NTCG163JFT103FT1S
    pub const fn ntcg163jft103ft1s() -> Self {
        Self {
            ntc_type: NtcType::NtcG163Jft103Ft1S,
            resistance_at_25c: defaults::RESISTANCE_AT_25C,
            beta_value: defaults::BETA_VALUE,
            reference_voltage: defaults::REFERENCE_VOLTAGE,
            series_resistance: defaults::SERIES_RESISTANCE,
            calibration_offset: defaults::CALIBRATION_OFFSET,
            conversion_method: ConversionMethod::Auto,
            adc_channel: defaults::ADC_CHANNEL,
            adc_resolution_bits: defaults::ADC_RESOLUTION_BITS,
            sample_count: defaults::SAMPLE_COUNT,
            sample_delay_ms: defaults::SAMPLE_DELAY_MS,
            min_temperature: defaults::MIN_TEMPERATURE,
            max_temperature: defaults::MAX_TEMPERATURE,
            enable_filtering: defaults::ENABLE_FILTERING,
            filter_alpha: defaults::FILTER_ALPHA,
        }
    }

    /// Default configuration for the NTCG164JF103FT1S
    pub const fn ntcg164jf103ft1s() -> Self {
        Self::for_type(NtcType::NtcG164Jf103Ft1S)
    }

    /// Default configuration for the NTCG163JF103FT1S
    pub const fn ntcg163jf103ft1s() -> Self {
        Self::for_type(NtcType::NtcG163Jf103Ft1S)
    }

    /// Configuration for a user-characterized part
    pub const fn custom(resistance_at_25c: f32, beta_value: f32) -> Self {
        let mut config = Self::for_type(NtcType::Custom);
        config.resistance_at_25c = resistance_at_25c;
        config.beta_value = beta_value;
        config
    }

    /// Default configuration with the nominal characteristics of `ntc_type`
    ///
    /// Custom and unknown parts get the generic 10 kΩ / 3435 K defaults.
    pub const fn for_type(ntc_type: NtcType) -> Self {
        let mut config = Self::ntcg163jft103ft1s();
        config.ntc_type = ntc_type;
        if let Some((resistance_at_25c, beta_value)) = ntc_type.nominal_characteristics() {
            config.resistance_at_25c = resistance_at_25c;
            config.beta_value = beta_value;
        }
        config
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), NtcError> {
        let valid = self.resistance_at_25c > 0.0
            && validate_beta_value(self.beta_value)
            && self.reference_voltage > 0.0
            && self.series_resistance > 0.0
            && self.sample_count > 0
            && self.min_temperature < self.max_temperature
            && (!self.enable_filtering || (0.0..=1.0).contains(&self.filter_alpha));

        if valid {
            Ok(())
        } else {
            Err(NtcError::InvalidParameter)
        }
    }
}

impl Default for NtcConfig {
    fn default() -> Self {
        Self::ntcg163jft103ft1s()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NtcConfig::default();
        assert_eq!(config.ntc_type, NtcType::NtcG163Jft103Ft1S);
        assert_eq!(config.conversion_method, ConversionMethod::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_type() {
        let config = NtcConfig::for_type(NtcType::NtcG164Jf103Ft1S);
        assert_eq!(config.ntc_type, NtcType::NtcG164Jf103Ft1S);
        assert_eq!(config.resistance_at_25c, 10_000.0);
        assert_eq!(config.beta_value, 3435.0);

        let custom = NtcConfig::custom(100_000.0, 3950.0);
        assert_eq!(custom.ntc_type, NtcType::Custom);
        assert_eq!(custom.resistance_at_25c, 100_000.0);
        assert!(custom.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_invariant() {
        let cases: [fn(&mut NtcConfig); 8] = [
            |c| c.resistance_at_25c = 0.0,
            |c| c.beta_value = 500.0,
            |c| c.reference_voltage = 0.0,
            |c| c.series_resistance = -1.0,
            |c| c.sample_count = 0,
            |c| c.min_temperature = c.max_temperature,
            |c| {
                c.enable_filtering = true;
                c.filter_alpha = 1.5;
            },
            |c| {
                c.enable_filtering = true;
                c.filter_alpha = -0.1;
            },
        ];

        for mutate in cases {
            let mut config = NtcConfig::default();
            mutate(&mut config);
            assert_eq!(config.validate(), Err(NtcError::InvalidParameter));
        }
    }

    #[test]
    fn test_alpha_ignored_when_filtering_disabled() {
        let mut config = NtcConfig::default();
        config.filter_alpha = 7.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(NtcType::NtcG163Jft103Ft1S.as_str(), "NTCG163JFT103FT1S");
        assert_eq!(NtcType::from_name("ntcg164jf103ft1s"), Some(NtcType::NtcG164Jf103Ft1S));
        assert_eq!(NtcType::from_name("custom"), Some(NtcType::Custom));
        assert_eq!(NtcType::from_name("PT100"), None);
        assert_eq!(ConversionMethod::LookupTable.as_str(), "Lookup Table");
    }
}
