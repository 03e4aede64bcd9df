//! ADC port - abstraction for sampling the thermistor voltage divider
//!
//! The driver never owns the ADC. It borrows an implementation of this trait
//! for its whole lifetime and only touches the ADC lifecycle through
//! [`AdcPort::ensure_initialized`].

/// Error type for ADC operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// ADC not initialized
    NotInitialized,
    /// Channel does not exist on this ADC
    InvalidChannel,
    /// Conversion failed
    ReadFailed,
    /// Timeout waiting for a conversion
    Timeout,
    /// Hardware error
    HardwareError,
}

impl core::fmt::Display for AdcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            AdcError::NotInitialized => "ADC not initialized",
            AdcError::InvalidChannel => "invalid ADC channel",
            AdcError::ReadFailed => "ADC read failed",
            AdcError::Timeout => "ADC timeout",
            AdcError::HardwareError => "ADC hardware error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdcError {}

/// Port for reading an analog channel
///
/// # Example Implementation
///
/// ```ignore
/// struct Mcp3008Adc {
///     spi: SpiDevice,
///     v_ref: f32,
/// }
///
/// impl AdcPort for Mcp3008Adc {
///     fn read_channel_count(&mut self, channel: u8) -> Result<u32, AdcError> {
///         let command = ((0b11000 | channel) as u16) << 11;
///         let raw = self.spi.transfer(command).map_err(|_| AdcError::ReadFailed)?;
///         Ok(raw >> 15 & 0x03ff)
///     }
///
///     fn read_channel_voltage(&mut self, channel: u8) -> Result<f32, AdcError> {
///         let raw = self.read_channel_count(channel)?;
///         Ok(raw as f32 / 1023.0 * self.v_ref)
///     }
///     // ...
/// }
/// ```
pub trait AdcPort {
    /// Whether the ADC is ready for conversions
    fn is_initialized(&self) -> bool;

    /// Initialize the ADC if it is not ready yet
    ///
    /// Returns `true` if the ADC is ready afterwards.
    fn ensure_initialized(&mut self) -> bool;

    /// Whether `channel` exists and can be sampled
    fn is_channel_available(&self, channel: u8) -> bool;

    /// Read the raw conversion result of `channel`
    fn read_channel_count(&mut self, channel: u8) -> Result<u32, AdcError>;

    /// Read the voltage on `channel` in volts
    fn read_channel_voltage(&mut self, channel: u8) -> Result<f32, AdcError>;

    /// ADC reference voltage in volts
    fn reference_voltage(&self) -> f32;

    /// ADC resolution in bits
    fn resolution_bits(&self) -> u8;
}
