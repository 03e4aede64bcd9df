//! NTC thermistor driver
//!
//! [`NtcThermistor`] turns the voltage across a thermistor in a divider into a
//! calibrated, optionally filtered temperature:
//!
//! ```text
//! ADC ──> average samples ──> divider ──> R ──> table | beta ──> + offset ──> EMA ──> range check
//! ```
//!
//! The driver borrows the ADC for its whole lifetime and never initializes
//! it beyond [`AdcPort::ensure_initialized`]. All operations are blocking;
//! multi-sample reads wait `sample_delay_ms` between samples through the
//! injected [`DelayNs`] provider.

use embedded_hal::delay::DelayNs;

use crate::domain::config::{ConversionMethod, NtcConfig, NtcType};
use crate::domain::conversion::{
    beta_resistance_to_temperature, thermistor_resistance_from_voltage, validate_beta_value,
};
use crate::domain::filter::EmaFilter;
use crate::domain::reading::NtcReading;
use crate::domain::tables::lookup_table_for;
use crate::domain::units::{celsius_to_fahrenheit, celsius_to_kelvin};
use crate::error::{NtcError, NtcResult};
use crate::ports::adc::{AdcError, AdcPort};

/// Typical accuracy of a catalogued NTC over its rated range (°C)
pub const TYPICAL_ACCURACY_CELSIUS: f32 = 0.5;

/// Driver for a single NTC thermistor on one ADC channel
pub struct NtcThermistor<'a, A: AdcPort + ?Sized, D: DelayNs> {
    adc: &'a mut A,
    delay: D,
    config: NtcConfig,
    initialized: bool,
    filter: EmaFilter,
}

impl<'a, A: AdcPort + ?Sized, D: DelayNs> NtcThermistor<'a, A, D> {
    /// Create an uninitialized driver with `config`
    ///
    /// The configuration is validated by [`NtcThermistor::initialize`].
    pub fn new(adc: &'a mut A, delay: D, config: NtcConfig) -> Self {
        Self {
            adc,
            delay,
            config,
            initialized: false,
            filter: EmaFilter::new(),
        }
    }

    /// Create an uninitialized driver with the default configuration of `ntc_type`
    pub fn with_type(adc: &'a mut A, delay: D, ntc_type: NtcType) -> Self {
        Self::new(adc, delay, NtcConfig::for_type(ntc_type))
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Validate the configuration and bring up the ADC
    ///
    /// Succeeds immediately if the driver is already initialized.
    pub fn initialize(&mut self) -> NtcResult<()> {
        if self.initialized {
            return Ok(());
        }

        if let Err(err) = self.config.validate() {
            warn!("NTC: invalid configuration, not initializing");
            return Err(err);
        }

        if !self.adc.is_initialized() && !self.adc.ensure_initialized() {
            warn!("NTC: ADC failed to initialize");
            return Err(NtcError::NotInitialized);
        }

        if !self.adc.is_channel_available(self.config.adc_channel) {
            warn!("NTC: ADC channel {} unavailable", self.config.adc_channel);
            return Err(NtcError::InvalidParameter);
        }

        self.filter.reset();
        self.initialized = true;
        info!(
            "NTC: initialized {} on channel {}",
            self.config.ntc_type.as_str(),
            self.config.adc_channel
        );
        Ok(())
    }

    /// Return to the uninitialized state, keeping the configuration
    pub fn deinitialize(&mut self) {
        if self.initialized {
            info!("NTC: deinitialized");
        }
        self.initialized = false;
        self.filter.reset();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Active configuration
    pub fn configuration(&self) -> NtcConfig {
        self.config
    }

    /// Replace the configuration
    ///
    /// On failure the previous configuration stays active. On success the
    /// filter is reset.
    pub fn set_configuration(&mut self, config: NtcConfig) -> NtcResult<()> {
        if let Err(err) = config.validate() {
            warn!("NTC: rejected configuration");
            return Err(err);
        }

        self.config = config;
        self.filter.reset();
        Ok(())
    }

    pub fn set_conversion_method(&mut self, method: ConversionMethod) {
        debug!("NTC: conversion method {}", method.as_str());
        self.config.conversion_method = method;
    }

    /// Set the series resistor of the divider (Ω)
    pub fn set_voltage_divider(&mut self, series_resistance: f32) -> NtcResult<()> {
        if !(series_resistance > 0.0) {
            warn!("NTC: rejected series resistance {}", series_resistance);
            return Err(NtcError::InvalidParameter);
        }
        self.config.series_resistance = series_resistance;
        Ok(())
    }

    /// Set the divider supply voltage (V)
    pub fn set_reference_voltage(&mut self, reference_voltage: f32) -> NtcResult<()> {
        if !(reference_voltage > 0.0) {
            warn!("NTC: rejected reference voltage {}", reference_voltage);
            return Err(NtcError::InvalidParameter);
        }
        self.config.reference_voltage = reference_voltage;
        Ok(())
    }

    pub fn set_beta_value(&mut self, beta_value: f32) -> NtcResult<()> {
        if !validate_beta_value(beta_value) {
            warn!("NTC: rejected beta {}", beta_value);
            return Err(NtcError::InvalidParameter);
        }
        self.config.beta_value = beta_value;
        Ok(())
    }

    /// Switch to another ADC channel
    ///
    /// The channel must be reported available by the ADC.
    pub fn set_adc_channel(&mut self, channel: u8) -> NtcResult<()> {
        if !self.adc.is_channel_available(channel) {
            warn!("NTC: ADC channel {} unavailable", channel);
            return Err(NtcError::InvalidParameter);
        }
        self.config.adc_channel = channel;
        Ok(())
    }

    /// Set the number of averaged samples and the delay between them
    pub fn set_sampling_parameters(&mut self, sample_count: u32, sample_delay_ms: u32) -> NtcResult<()> {
        if sample_count == 0 {
            warn!("NTC: rejected sample count 0");
            return Err(NtcError::InvalidParameter);
        }
        self.config.sample_count = sample_count;
        self.config.sample_delay_ms = sample_delay_ms;
        Ok(())
    }

    /// Enable or disable the EMA filter
    ///
    /// Always resets the filter state.
    pub fn set_filtering(&mut self, enable: bool, alpha: f32) -> NtcResult<()> {
        if !(0.0..=1.0).contains(&alpha) {
            warn!("NTC: rejected filter alpha {}", alpha);
            return Err(NtcError::InvalidParameter);
        }
        self.config.enable_filtering = enable;
        self.config.filter_alpha = alpha;
        self.filter.reset();
        Ok(())
    }

    // ========================================================================
    // Calibration
    // ========================================================================

    /// Calibrate against a known reference temperature
    ///
    /// Reads the current temperature and sets the offset so that it would
    /// have read `reference_celsius`. The filter is left untouched.
    pub fn calibrate(&mut self, reference_celsius: f32) -> NtcResult<()> {
        let measured = self.read_temperature_celsius()?;
        self.config.calibration_offset = reference_celsius - measured;
        info!(
            "NTC: calibrated, offset {} C",
            self.config.calibration_offset
        );
        Ok(())
    }

    pub fn set_calibration_offset(&mut self, offset_celsius: f32) {
        self.config.calibration_offset = offset_celsius;
    }

    pub fn calibration_offset(&self) -> f32 {
        self.config.calibration_offset
    }

    pub fn reset_calibration(&mut self) {
        self.config.calibration_offset = 0.0;
    }

    // ========================================================================
    // Reading
    // ========================================================================

    /// Read the temperature in Celsius
    pub fn read_temperature_celsius(&mut self) -> NtcResult<f32> {
        self.ensure_ready()?;
        let voltage = self.acquire_voltage()?;
        let (_, temperature) = self.convert_voltage(voltage)?;
        Ok(temperature)
    }

    pub fn read_temperature_fahrenheit(&mut self) -> NtcResult<f32> {
        self.read_temperature_celsius().map(celsius_to_fahrenheit)
    }

    pub fn read_temperature_kelvin(&mut self) -> NtcResult<f32> {
        self.read_temperature_celsius().map(celsius_to_kelvin)
    }

    /// Read a complete measurement
    ///
    /// Resistance and temperature come from one voltage acquisition. The raw
    /// count is read before conversion so a failed count leaves the filter
    /// untouched.
    pub fn read_temperature(&mut self) -> NtcResult<NtcReading> {
        self.ensure_ready()?;
        let voltage = self.acquire_voltage()?;
        let raw = self.acquire_count()?;
        let (resistance, temperature) = self.convert_voltage(voltage)?;

        Ok(NtcReading::new(
            temperature,
            resistance,
            voltage,
            raw,
            timestamp_us(),
            TYPICAL_ACCURACY_CELSIUS,
        ))
    }

    /// Read the thermistor resistance (Ω)
    pub fn read_resistance(&mut self) -> NtcResult<f32> {
        self.ensure_ready()?;
        let voltage = self.acquire_voltage()?;
        self.voltage_to_resistance(voltage)
    }

    /// Read the averaged divider voltage (V)
    pub fn read_voltage(&mut self) -> NtcResult<f32> {
        self.ensure_ready()?;
        self.acquire_voltage()
    }

    /// Read the averaged raw ADC count
    pub fn read_raw_adc_value(&mut self) -> NtcResult<u32> {
        self.ensure_ready()?;
        self.acquire_count()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure_ready(&self) -> NtcResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(NtcError::NotInitialized)
        }
    }

    fn acquire_voltage(&mut self) -> NtcResult<f32> {
        let channel = self.config.adc_channel;
        let (sum, ok) = self.sample(|adc| adc.read_channel_voltage(channel).map(f64::from))?;
        Ok((sum / f64::from(ok)) as f32)
    }

    fn acquire_count(&mut self) -> NtcResult<u32> {
        let channel = self.config.adc_channel;
        let (sum, ok) = self.sample(|adc| adc.read_channel_count(channel).map(f64::from))?;
        Ok(libm::round(sum / f64::from(ok)) as u32)
    }

    /// Run the sampling policy with `read`, returning (sum, successful samples)
    ///
    /// A single sample maps its ADC error directly. With several samples,
    /// failures are skipped and only a fully failed batch is an error.
    fn sample<F>(&mut self, mut read: F) -> NtcResult<(f64, u32)>
    where
        F: FnMut(&mut A) -> Result<f64, AdcError>,
    {
        let count = self.config.sample_count;
        if count <= 1 {
            let value = read(&mut *self.adc).map_err(|err| {
                debug!("NTC: ADC read failed: {}", err);
                NtcError::from(err)
            })?;
            return Ok((value, 1));
        }

        let mut sum = 0.0f64;
        let mut ok = 0u32;
        for i in 0..count {
            match read(&mut *self.adc) {
                Ok(value) => {
                    sum += value;
                    ok += 1;
                }
                Err(err) => debug!("NTC: sample {} failed: {}", i, err),
            }
            if i + 1 < count && self.config.sample_delay_ms > 0 {
                self.delay.delay_ms(self.config.sample_delay_ms);
            }
        }

        if ok == 0 {
            warn!("NTC: all {} samples failed", count);
            return Err(NtcError::AdcReadFailed);
        }
        Ok((sum, ok))
    }

    fn voltage_to_resistance(&self, voltage: f32) -> NtcResult<f32> {
        thermistor_resistance_from_voltage(
            voltage,
            self.config.reference_voltage,
            self.config.series_resistance,
        )
        .map_err(NtcError::from)
    }

    fn resistance_to_temperature(&self, resistance: f32) -> NtcResult<f32> {
        if self.config.conversion_method == ConversionMethod::LookupTable {
            match lookup_table_for(self.config.ntc_type).map(|table| table.find_temperature(resistance)) {
                Some(Ok(temperature)) => return Ok(temperature),
                Some(Err(err)) => debug!("NTC: table lookup failed ({}), using beta model", err),
                None => debug!("NTC: no table for {}, using beta model", self.config.ntc_type.as_str()),
            }
        }

        beta_resistance_to_temperature(
            resistance,
            self.config.resistance_at_25c,
            self.config.beta_value,
        )
        .map_err(NtcError::from)
    }

    /// Voltage to (resistance, calibrated and filtered temperature)
    fn convert_voltage(&mut self, voltage: f32) -> NtcResult<(f32, f32)> {
        let resistance = self.voltage_to_resistance(voltage)?;
        let mut temperature = self.resistance_to_temperature(resistance)? + self.config.calibration_offset;

        if self.config.enable_filtering {
            temperature = self.filter.apply(temperature, self.config.filter_alpha);
        }

        if !(self.config.min_temperature..=self.config.max_temperature).contains(&temperature) {
            warn!("NTC: {} C outside configured range", temperature);
            return Err(NtcError::TemperatureOutOfRange);
        }

        Ok((resistance, temperature))
    }
}

#[cfg(feature = "embassy-time")]
fn timestamp_us() -> u64 {
    embassy_time::Instant::now().as_micros()
}

#[cfg(not(feature = "embassy-time"))]
fn timestamp_us() -> u64 {
    0
}
