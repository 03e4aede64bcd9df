//! Driver error taxonomy
//!
//! Every fallible driver operation returns [`NtcError`]. The numeric codes are
//! stable so they can be reported over a wire or stored in a status register;
//! code `0` is reserved for success and never appears as a variant.

use core::fmt;

use crate::domain::conversion::ConversionError;
use crate::domain::lookup_table::LookupError;
use crate::ports::adc::AdcError;

/// Error returned by the thermistor driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum NtcError {
    // General
    /// General failure
    Failure = 1,
    /// Unsupported operation
    UnsupportedOperation = 13,

    // Lifecycle
    /// Driver not initialized
    NotInitialized = 2,
    /// Driver already initialized (reserved)
    AlreadyInitialized = 3,

    // Parameter validation
    /// Invalid parameter
    InvalidParameter = 4,
    /// Missing required reference (reserved)
    NullPointer = 5,
    /// Resistance outside the physically valid range
    InvalidResistance = 8,
    /// Temperature outside the configured range
    TemperatureOutOfRange = 9,

    // I/O
    /// ADC read failed
    AdcReadFailed = 7,
    /// ADC timed out
    Timeout = 14,
    /// ADC hardware fault
    HardwareFault = 15,

    // Conversion
    /// Lookup table error
    LookupTableError = 10,
    /// Temperature conversion failed
    ConversionFailed = 11,

    /// Calibration failed (reserved)
    CalibrationFailed = 12,

    /// Out of memory (reserved)
    OutOfMemory = 6,
}

impl NtcError {
    /// Numeric error code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable description of the error
    pub const fn as_str(self) -> &'static str {
        match self {
            NtcError::Failure => "General failure",
            NtcError::NotInitialized => "Not initialized",
            NtcError::AlreadyInitialized => "Already initialized",
            NtcError::InvalidParameter => "Invalid parameter",
            NtcError::NullPointer => "Null pointer",
            NtcError::OutOfMemory => "Out of memory",
            NtcError::AdcReadFailed => "ADC read failed",
            NtcError::InvalidResistance => "Invalid resistance value",
            NtcError::TemperatureOutOfRange => "Temperature out of range",
            NtcError::LookupTableError => "Lookup table error",
            NtcError::ConversionFailed => "Temperature conversion failed",
            NtcError::CalibrationFailed => "Calibration failed",
            NtcError::UnsupportedOperation => "Operation not supported",
            NtcError::Timeout => "Operation timeout",
            NtcError::HardwareFault => "Hardware fault",
        }
    }

    /// Look up an error by its numeric code
    ///
    /// Returns `None` for `0` (success) and for unknown codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => NtcError::Failure,
            2 => NtcError::NotInitialized,
            3 => NtcError::AlreadyInitialized,
            4 => NtcError::InvalidParameter,
            5 => NtcError::NullPointer,
            6 => NtcError::OutOfMemory,
            7 => NtcError::AdcReadFailed,
            8 => NtcError::InvalidResistance,
            9 => NtcError::TemperatureOutOfRange,
            10 => NtcError::LookupTableError,
            11 => NtcError::ConversionFailed,
            12 => NtcError::CalibrationFailed,
            13 => NtcError::UnsupportedOperation,
            14 => NtcError::Timeout,
            15 => NtcError::HardwareFault,
            _ => return None,
        })
    }
}

/// Description for a raw status code, including `0` for success
pub const fn status_str(code: u8) -> &'static str {
    match NtcError::from_code(code) {
        Some(err) => err.as_str(),
        None if code == 0 => "Success",
        None => "Unknown error",
    }
}

impl fmt::Display for NtcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NtcError {}

impl From<AdcError> for NtcError {
    fn from(err: AdcError) -> Self {
        match err {
            AdcError::NotInitialized => NtcError::NotInitialized,
            AdcError::InvalidChannel => NtcError::InvalidParameter,
            AdcError::ReadFailed => NtcError::AdcReadFailed,
            AdcError::Timeout => NtcError::Timeout,
            AdcError::HardwareError => NtcError::HardwareFault,
        }
    }
}

impl From<ConversionError> for NtcError {
    fn from(_: ConversionError) -> Self {
        NtcError::ConversionFailed
    }
}

impl From<LookupError> for NtcError {
    fn from(_: LookupError) -> Self {
        NtcError::LookupTableError
    }
}

/// Result type for driver operations
pub type NtcResult<T> = Result<T, NtcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in 1..=15u8 {
            let err = NtcError::from_code(code).unwrap();
            assert_eq!(err.code(), code);
        }
        assert_eq!(NtcError::from_code(0), None);
        assert_eq!(NtcError::from_code(16), None);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(status_str(0), "Success");
        assert_eq!(status_str(7), "ADC read failed");
        assert_eq!(status_str(200), "Unknown error");
        assert_eq!(NtcError::ConversionFailed.as_str(), "Temperature conversion failed");
    }

    #[test]
    fn test_adc_error_mapping() {
        assert_eq!(NtcError::from(AdcError::NotInitialized), NtcError::NotInitialized);
        assert_eq!(NtcError::from(AdcError::InvalidChannel), NtcError::InvalidParameter);
        assert_eq!(NtcError::from(AdcError::ReadFailed), NtcError::AdcReadFailed);
        assert_eq!(NtcError::from(AdcError::Timeout), NtcError::Timeout);
        assert_eq!(NtcError::from(AdcError::HardwareError), NtcError::HardwareFault);
    }
}
