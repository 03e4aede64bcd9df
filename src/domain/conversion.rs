//! Resistance / temperature conversion math
//!
//! Stateless functions implementing the beta-parameter and Steinhart-Hart
//! thermistor models, the voltage-divider equations, input validation, and
//! coefficient fitting from measured points.
//!
//! All temperatures are in degrees Celsius at the API boundary and converted
//! to Kelvin internally. Float math goes through `libm` so the same code runs
//! on targets without `std`.

use libm::{expf, fabsf, logf, sqrtf};

// ============================================================================
// Constants
// ============================================================================

/// Offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f32 = 273.15;
/// Absolute zero in Celsius
pub const ABSOLUTE_ZERO_CELSIUS: f32 = -273.15;
/// Reference temperature of the beta model (25 °C)
pub const REFERENCE_TEMPERATURE_CELSIUS: f32 = 25.0;
/// Reference temperature of the beta model in Kelvin
pub const REFERENCE_TEMPERATURE_KELVIN: f32 = REFERENCE_TEMPERATURE_CELSIUS + KELVIN_OFFSET;

/// Default Steinhart-Hart coefficient A (10 kΩ NTC)
pub const STEINHART_HART_A: f32 = 1.129241e-3;
/// Default Steinhart-Hart coefficient B (10 kΩ NTC)
pub const STEINHART_HART_B: f32 = 2.341077e-4;
/// Default Steinhart-Hart coefficient C (10 kΩ NTC)
pub const STEINHART_HART_C: f32 = 8.775468e-8;

/// Smallest resistance accepted by the models (Ω)
pub const MIN_RESISTANCE_OHMS: f32 = 0.1;
/// Largest resistance accepted by the models (Ω)
pub const MAX_RESISTANCE_OHMS: f32 = 1_000_000.0;
/// Smallest temperature accepted by the models (°C)
pub const MIN_TEMPERATURE_CELSIUS: f32 = ABSOLUTE_ZERO_CELSIUS;
/// Largest temperature accepted by the models (°C)
pub const MAX_TEMPERATURE_CELSIUS: f32 = 1000.0;
/// Smallest accepted beta value (K)
pub const MIN_BETA_VALUE: f32 = 1000.0;
/// Largest accepted beta value (K)
#[cfg(not(feature = "extended-beta-range"))]
pub const MAX_BETA_VALUE: f32 = 5000.0;
/// Largest accepted beta value (K)
#[cfg(feature = "extended-beta-range")]
pub const MAX_BETA_VALUE: f32 = 10_000.0;

/// Beta value assumed by the heuristics that don't take one as input
pub const TYPICAL_BETA_VALUE: f32 = 3435.0;

/// Comparison epsilon for single-precision inputs
pub const EPSILON: f32 = 1e-6;
/// Below this magnitude the coefficient-fitting system is singular
const SINGULAR_DETERMINANT: f64 = 1e-12;
/// Bound on `|ln R|` for the approximate Steinhart-Hart inverse
const MAX_LN_RESISTANCE: f32 = 20.0;
/// Smallest nominal resistance for series-resistor selection (Ω)
const MIN_NOMINAL_RESISTANCE_OHMS: f32 = 100.0;

const MIN_COEFF_A: f32 = -1e-2;
const MAX_COEFF_A: f32 = 1e-2;
const MIN_COEFF_B: f32 = 1e-4;
const MAX_COEFF_B: f32 = 1e-3;
const MIN_COEFF_C: f32 = -1e-7;
const MAX_COEFF_C: f32 = 1e-7;

// ============================================================================
// Errors
// ============================================================================

/// Reason a conversion was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// Resistance outside [`MIN_RESISTANCE_OHMS`, `MAX_RESISTANCE_OHMS`]
    ResistanceOutOfRange,
    /// Temperature outside [`MIN_TEMPERATURE_CELSIUS`, `MAX_TEMPERATURE_CELSIUS`]
    TemperatureOutOfRange,
    /// Voltage outside `[0, reference]`
    VoltageOutOfRange,
    /// Beta value outside [`MIN_BETA_VALUE`, `MAX_BETA_VALUE`]
    InvalidBeta,
    /// Steinhart-Hart coefficients outside their plausible ranges
    InvalidCoefficients,
    /// Non-positive nominal resistance, reference voltage, or tolerance out of range
    InvalidParameter,
    /// The model produced a non-physical result (e.g. negative Kelvin)
    NonPhysical,
    /// Inputs too close together to solve (equal points, singular system,
    /// thermistor voltage at the reference voltage)
    Degenerate,
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConversionError::ResistanceOutOfRange => "resistance out of range",
            ConversionError::TemperatureOutOfRange => "temperature out of range",
            ConversionError::VoltageOutOfRange => "voltage out of range",
            ConversionError::InvalidBeta => "invalid beta value",
            ConversionError::InvalidCoefficients => "invalid Steinhart-Hart coefficients",
            ConversionError::InvalidParameter => "invalid parameter",
            ConversionError::NonPhysical => "non-physical result",
            ConversionError::Degenerate => "degenerate input",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// Result type for conversion functions
pub type ConversionResult<T> = Result<T, ConversionError>;

// ============================================================================
// Validation
// ============================================================================

/// Whether `resistance` lies in `[min, max]`
#[inline]
pub fn validate_resistance(resistance: f32, min: f32, max: f32) -> bool {
    resistance >= min && resistance <= max
}

/// Whether `temperature` lies in `[min, max]`
#[inline]
pub fn validate_temperature(temperature: f32, min: f32, max: f32) -> bool {
    temperature >= min && temperature <= max
}

/// Whether `voltage` lies in `[min, max]`
#[inline]
pub fn validate_voltage(voltage: f32, min: f32, max: f32) -> bool {
    voltage >= min && voltage <= max
}

/// Whether `beta` is a plausible NTC beta value
#[inline]
pub fn validate_beta_value(beta: f32) -> bool {
    beta >= MIN_BETA_VALUE && beta <= MAX_BETA_VALUE
}

/// Whether the Steinhart-Hart coefficients fall in empirically plausible ranges
pub fn validate_steinhart_hart_coefficients(a: f32, b: f32, c: f32) -> bool {
    (MIN_COEFF_A..=MAX_COEFF_A).contains(&a)
        && (MIN_COEFF_B..=MAX_COEFF_B).contains(&b)
        && (MIN_COEFF_C..=MAX_COEFF_C).contains(&c)
}

fn check_resistance(resistance: f32) -> ConversionResult<()> {
    if validate_resistance(resistance, MIN_RESISTANCE_OHMS, MAX_RESISTANCE_OHMS) {
        Ok(())
    } else {
        Err(ConversionError::ResistanceOutOfRange)
    }
}

fn check_temperature(temperature: f32) -> ConversionResult<()> {
    if validate_temperature(temperature, MIN_TEMPERATURE_CELSIUS, MAX_TEMPERATURE_CELSIUS) {
        Ok(())
    } else {
        Err(ConversionError::TemperatureOutOfRange)
    }
}

fn check_beta(beta: f32) -> ConversionResult<()> {
    if validate_beta_value(beta) {
        Ok(())
    } else {
        Err(ConversionError::InvalidBeta)
    }
}

fn check_coefficients(a: f32, b: f32, c: f32) -> ConversionResult<()> {
    if validate_steinhart_hart_coefficients(a, b, c) {
        Ok(())
    } else {
        Err(ConversionError::InvalidCoefficients)
    }
}

// ============================================================================
// Beta model
// ============================================================================

/// Convert resistance to temperature with the beta equation
///
/// `1/T = 1/T0 + ln(R/R25) / beta`, with `T0` = 298.15 K.
pub fn beta_resistance_to_temperature(
    resistance: f32,
    resistance_at_25c: f32,
    beta: f32,
) -> ConversionResult<f32> {
    check_resistance(resistance)?;
    check_beta(beta)?;
    if resistance_at_25c <= 0.0 {
        return Err(ConversionError::InvalidParameter);
    }

    let ln_ratio = logf(resistance / resistance_at_25c);
    let inv_temperature = 1.0 / REFERENCE_TEMPERATURE_KELVIN + ln_ratio / beta;
    if inv_temperature <= 0.0 {
        return Err(ConversionError::NonPhysical);
    }

    Ok(1.0 / inv_temperature - KELVIN_OFFSET)
}

/// Convert temperature to resistance with the beta equation
///
/// `R = R25 * exp(beta * (1/T - 1/T0))`
pub fn beta_temperature_to_resistance(
    temperature: f32,
    resistance_at_25c: f32,
    beta: f32,
) -> ConversionResult<f32> {
    check_temperature(temperature)?;
    check_beta(beta)?;
    if resistance_at_25c <= 0.0 {
        return Err(ConversionError::InvalidParameter);
    }

    let kelvin = temperature + KELVIN_OFFSET;
    if kelvin <= 0.0 {
        return Err(ConversionError::NonPhysical);
    }

    let inv_diff = 1.0 / kelvin - 1.0 / REFERENCE_TEMPERATURE_KELVIN;
    Ok(resistance_at_25c * expf(beta * inv_diff))
}

// ============================================================================
// Steinhart-Hart model
// ============================================================================

/// Convert resistance to temperature with the Steinhart-Hart equation
///
/// `1/T = A + B*ln(R) + C*ln(R)^3`
pub fn steinhart_hart_resistance_to_temperature(
    resistance: f32,
    a: f32,
    b: f32,
    c: f32,
) -> ConversionResult<f32> {
    check_resistance(resistance)?;
    check_coefficients(a, b, c)?;

    let ln_r = logf(resistance);
    let inv_temperature = a + b * ln_r + c * ln_r * ln_r * ln_r;
    if inv_temperature <= 0.0 {
        return Err(ConversionError::NonPhysical);
    }

    Ok(1.0 / inv_temperature - KELVIN_OFFSET)
}

/// Convert temperature to resistance with the Steinhart-Hart equation
///
/// Approximate: the cubic term is dropped, `ln(R) ≈ (1/T - A) / B`. For
/// typical NTC coefficients `C` is small enough that the error stays within a
/// few percent near room temperature, but this is not an exact inverse of
/// [`steinhart_hart_resistance_to_temperature`].
pub fn steinhart_hart_temperature_to_resistance(
    temperature: f32,
    a: f32,
    b: f32,
    c: f32,
) -> ConversionResult<f32> {
    check_temperature(temperature)?;
    check_coefficients(a, b, c)?;

    let kelvin = temperature + KELVIN_OFFSET;
    if kelvin <= 0.0 {
        return Err(ConversionError::NonPhysical);
    }

    let ln_r = (1.0 / kelvin - a) / b;
    if ln_r <= -MAX_LN_RESISTANCE || ln_r >= MAX_LN_RESISTANCE {
        return Err(ConversionError::NonPhysical);
    }

    Ok(expf(ln_r))
}

/// Steinhart-Hart conversion with the default 10 kΩ coefficients
pub fn default_resistance_to_temperature(resistance: f32) -> ConversionResult<f32> {
    steinhart_hart_resistance_to_temperature(
        resistance,
        STEINHART_HART_A,
        STEINHART_HART_B,
        STEINHART_HART_C,
    )
}

/// Approximate Steinhart-Hart inverse with the default 10 kΩ coefficients
pub fn default_temperature_to_resistance(temperature: f32) -> ConversionResult<f32> {
    steinhart_hart_temperature_to_resistance(
        temperature,
        STEINHART_HART_A,
        STEINHART_HART_B,
        STEINHART_HART_C,
    )
}

// ============================================================================
// Voltage divider
// ============================================================================
//
//  Vref *--
//         |
//      R_series
//         |---- V_th
//       R_ntc
//         |
//  GND  *--

/// Thermistor resistance from the voltage measured across it
///
/// `R = R_series * V_th / (V_ref - V_th)`
pub fn thermistor_resistance_from_voltage(
    thermistor_voltage: f32,
    reference_voltage: f32,
    series_resistance: f32,
) -> ConversionResult<f32> {
    if reference_voltage <= 0.0 || series_resistance <= 0.0 {
        return Err(ConversionError::InvalidParameter);
    }
    if !validate_voltage(thermistor_voltage, 0.0, reference_voltage) {
        return Err(ConversionError::VoltageOutOfRange);
    }

    let voltage_diff = reference_voltage - thermistor_voltage;
    if fabsf(voltage_diff) < EPSILON {
        return Err(ConversionError::Degenerate);
    }

    Ok(series_resistance * (thermistor_voltage / voltage_diff))
}

/// Voltage across the thermistor for a given resistance
///
/// `V_th = V_ref * R / (R_series + R)`
pub fn thermistor_voltage_from_resistance(
    resistance: f32,
    reference_voltage: f32,
    series_resistance: f32,
) -> ConversionResult<f32> {
    check_resistance(resistance)?;
    if reference_voltage <= 0.0 || series_resistance <= 0.0 {
        return Err(ConversionError::InvalidParameter);
    }

    Ok(reference_voltage * (resistance / (series_resistance + resistance)))
}

/// Fraction of the reference voltage that drops across the thermistor
pub fn voltage_divider_ratio(resistance: f32, series_resistance: f32) -> ConversionResult<f32> {
    check_resistance(resistance)?;
    if series_resistance <= 0.0 {
        return Err(ConversionError::InvalidParameter);
    }

    Ok(resistance / (series_resistance + resistance))
}

// ============================================================================
// Fitting and design helpers
// ============================================================================

/// Beta value from two measured (temperature, resistance) points
///
/// `beta = ln(R1/R2) / (1/T1 - 1/T2)`
pub fn calculate_beta_value(
    temperature1: f32,
    resistance1: f32,
    temperature2: f32,
    resistance2: f32,
) -> ConversionResult<f32> {
    check_temperature(temperature1)?;
    check_temperature(temperature2)?;
    check_resistance(resistance1)?;
    check_resistance(resistance2)?;
    if fabsf(temperature1 - temperature2) < EPSILON {
        return Err(ConversionError::Degenerate);
    }

    let inv_diff = 1.0 / (temperature1 + KELVIN_OFFSET) - 1.0 / (temperature2 + KELVIN_OFFSET);
    if fabsf(inv_diff) < EPSILON * EPSILON {
        return Err(ConversionError::Degenerate);
    }

    let beta = logf(resistance1 / resistance2) / inv_diff;
    check_beta(beta)?;
    Ok(beta)
}

/// Steinhart-Hart coefficients fitted through three (temperature, resistance)
/// points
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SteinhartHartCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SteinhartHartCoefficients {
    /// Coefficients for a typical 10 kΩ NTC
    pub const DEFAULT: Self = Self {
        a: STEINHART_HART_A,
        b: STEINHART_HART_B,
        c: STEINHART_HART_C,
    };

    /// Convert a resistance with these coefficients
    pub fn resistance_to_temperature(&self, resistance: f32) -> ConversionResult<f32> {
        steinhart_hart_resistance_to_temperature(resistance, self.a, self.b, self.c)
    }

    /// Approximate inverse with these coefficients
    pub fn temperature_to_resistance(&self, temperature: f32) -> ConversionResult<f32> {
        steinhart_hart_temperature_to_resistance(temperature, self.a, self.b, self.c)
    }
}

/// Determinant of a 3×3 matrix given by rows
fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Solve for Steinhart-Hart coefficients through three calibration points
///
/// Each point contributes one row of `[1, ln R, ln R^3] · [A, B, C] = 1/T`,
/// solved with Cramer's rule. The system is evaluated in double precision:
/// `ln R^3` is in the hundreds while `C` is around 1e-7.
pub fn calculate_steinhart_hart_coefficients(
    points: [(f32, f32); 3],
) -> ConversionResult<SteinhartHartCoefficients> {
    for &(temperature, resistance) in &points {
        check_temperature(temperature)?;
        check_resistance(resistance)?;
    }

    let [(t1, _), (t2, _), (t3, _)] = points;
    if fabsf(t1 - t2) < EPSILON || fabsf(t2 - t3) < EPSILON || fabsf(t1 - t3) < EPSILON {
        return Err(ConversionError::Degenerate);
    }

    let mut rows = [[0.0f64; 3]; 3];
    let mut rhs = [0.0f64; 3];
    for (i, &(temperature, resistance)) in points.iter().enumerate() {
        let ln_r = libm::log(f64::from(resistance));
        rows[i] = [1.0, ln_r, ln_r * ln_r * ln_r];
        rhs[i] = 1.0 / (f64::from(temperature) + f64::from(KELVIN_OFFSET));
    }

    let det = det3(rows);
    if libm::fabs(det) < SINGULAR_DETERMINANT {
        return Err(ConversionError::Degenerate);
    }

    let mut solution = [0.0f64; 3];
    for (col, value) in solution.iter_mut().enumerate() {
        let mut m = rows;
        for (row, r) in m.iter_mut().enumerate() {
            r[col] = rhs[row];
        }
        *value = det3(m) / det;
    }

    let coefficients = SteinhartHartCoefficients {
        a: solution[0] as f32,
        b: solution[1] as f32,
        c: solution[2] as f32,
    };
    check_coefficients(coefficients.a, coefficients.b, coefficients.c)?;
    Ok(coefficients)
}

/// Rough temperature uncertainty from component tolerances
///
/// Root-sum-square of a resistance term (`R * tol / 100`) and a beta term
/// (`3435 K * tol / 1000`). Both tolerances are fractions in `[0, 1]`. This
/// is a coarse estimate, not an uncertainty propagation.
pub fn calculate_temperature_accuracy(
    resistance: f32,
    resistance_tolerance: f32,
    beta_tolerance: f32,
) -> ConversionResult<f32> {
    check_resistance(resistance)?;
    if !(0.0..=1.0).contains(&resistance_tolerance) || !(0.0..=1.0).contains(&beta_tolerance) {
        return Err(ConversionError::InvalidParameter);
    }

    let temp_error_resistance = resistance * resistance_tolerance / 100.0;
    let temp_error_beta = TYPICAL_BETA_VALUE * beta_tolerance / 1000.0;

    Ok(sqrtf(
        temp_error_resistance * temp_error_resistance + temp_error_beta * temp_error_beta,
    ))
}

/// Series resistor that linearizes the divider over `[min_temperature, max_temperature]`
///
/// Geometric mean of the thermistor resistance at both ends of the range,
/// computed with the beta model at [`TYPICAL_BETA_VALUE`] regardless of the
/// actual part.
pub fn calculate_optimal_series_resistance(
    resistance_at_25c: f32,
    min_temperature: f32,
    max_temperature: f32,
) -> ConversionResult<f32> {
    if !validate_resistance(resistance_at_25c, MIN_NOMINAL_RESISTANCE_OHMS, MAX_RESISTANCE_OHMS) {
        return Err(ConversionError::ResistanceOutOfRange);
    }
    check_temperature(min_temperature)?;
    check_temperature(max_temperature)?;
    if min_temperature >= max_temperature {
        return Err(ConversionError::InvalidParameter);
    }

    let r_cold = beta_temperature_to_resistance(min_temperature, resistance_at_25c, TYPICAL_BETA_VALUE)?;
    let r_hot = beta_temperature_to_resistance(max_temperature, resistance_at_25c, TYPICAL_BETA_VALUE)?;

    Ok(sqrtf(r_cold * r_hot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_beta_nominal_point() {
        let t = beta_resistance_to_temperature(10_000.0, 10_000.0, 3435.0).unwrap();
        assert_abs_diff_eq!(t, 25.0, epsilon = 0.01);

        let r = beta_temperature_to_resistance(25.0, 10_000.0, 3435.0).unwrap();
        assert_relative_eq!(r, 10_000.0, max_relative = 1e-4);
    }

    #[test]
    fn test_beta_round_trip() {
        for &t in &[-40.0f32, -10.0, 0.0, 25.0, 60.0, 100.0, 125.0] {
            let r = beta_temperature_to_resistance(t, 10_000.0, 3435.0).unwrap();
            let back = beta_resistance_to_temperature(r, 10_000.0, 3435.0).unwrap();
            assert_abs_diff_eq!(back, t, epsilon = 0.01);
        }

        for &r in &[500.0f32, 2_000.0, 10_000.0, 47_000.0, 200_000.0] {
            let t = beta_resistance_to_temperature(r, 10_000.0, 3435.0).unwrap();
            let back = beta_temperature_to_resistance(t, 10_000.0, 3435.0).unwrap();
            assert_relative_eq!(back, r, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_beta_monotonic_decreasing() {
        let mut last = f32::INFINITY;
        let mut r = 100.0f32;
        while r < 500_000.0 {
            let t = beta_resistance_to_temperature(r, 10_000.0, 3435.0).unwrap();
            assert!(t < last, "temperature must fall as resistance rises");
            last = t;
            r *= 1.5;
        }
    }

    #[test]
    fn test_beta_rejects_invalid_inputs() {
        assert_eq!(
            beta_resistance_to_temperature(0.01, 10_000.0, 3435.0),
            Err(ConversionError::ResistanceOutOfRange)
        );
        assert_eq!(
            beta_resistance_to_temperature(10_000.0, 10_000.0, 500.0),
            Err(ConversionError::InvalidBeta)
        );
        assert_eq!(
            beta_resistance_to_temperature(10_000.0, 0.0, 3435.0),
            Err(ConversionError::InvalidParameter)
        );
        assert_eq!(
            beta_temperature_to_resistance(1500.0, 10_000.0, 3435.0),
            Err(ConversionError::TemperatureOutOfRange)
        );
        assert_eq!(
            beta_temperature_to_resistance(-273.15, 10_000.0, 3435.0),
            Err(ConversionError::NonPhysical)
        );
    }

    #[test]
    fn test_beta_non_physical_inverse_temperature() {
        // ln(0.1 / 1e6) / 1000 outweighs 1/298.15, giving a negative 1/T
        assert_eq!(
            beta_resistance_to_temperature(0.1, 1_000_000.0, 1000.0),
            Err(ConversionError::NonPhysical)
        );
    }

    #[test]
    fn test_steinhart_hart_default_coefficients() {
        let t = default_resistance_to_temperature(10_000.0).unwrap();
        assert_abs_diff_eq!(t, 25.0, epsilon = 0.1);

        // Dropping the cubic term overestimates R: exp((1/298.15 - A) / B)
        let r = default_temperature_to_resistance(25.0).unwrap();
        assert_relative_eq!(r, 13_402.7, max_relative = 1e-3);
        assert!(r > 10_000.0);
    }

    #[test]
    fn test_steinhart_hart_rejects_bad_coefficients() {
        assert_eq!(
            steinhart_hart_resistance_to_temperature(10_000.0, 1.0, 2.3e-4, 8.0e-8),
            Err(ConversionError::InvalidCoefficients)
        );
        assert_eq!(
            steinhart_hart_temperature_to_resistance(25.0, 1.1e-3, 2.3e-4, 1.0e-6),
            Err(ConversionError::InvalidCoefficients)
        );
    }

    #[test]
    fn test_steinhart_hart_inverse_out_of_range() {
        // (1/298.15 + 0.01) / 1e-4 ≈ 133, far beyond |ln R| < 20
        assert_eq!(
            steinhart_hart_temperature_to_resistance(25.0, -1e-2, 1e-4, 0.0),
            Err(ConversionError::NonPhysical)
        );
    }

    #[test]
    fn test_voltage_divider_midpoint() {
        let r = thermistor_resistance_from_voltage(1.65, 3.3, 10_000.0).unwrap();
        assert_relative_eq!(r, 10_000.0, max_relative = 1e-4);

        let v = thermistor_voltage_from_resistance(10_000.0, 3.3, 10_000.0).unwrap();
        assert_abs_diff_eq!(v, 1.65, epsilon = 1e-5);

        let ratio = voltage_divider_ratio(10_000.0, 10_000.0).unwrap();
        assert_abs_diff_eq!(ratio, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_voltage_divider_rejects_reference_voltage() {
        assert_eq!(
            thermistor_resistance_from_voltage(3.3, 3.3, 10_000.0),
            Err(ConversionError::Degenerate)
        );
        assert_eq!(
            thermistor_resistance_from_voltage(3.5, 3.3, 10_000.0),
            Err(ConversionError::VoltageOutOfRange)
        );
        assert_eq!(
            thermistor_resistance_from_voltage(1.0, 0.0, 10_000.0),
            Err(ConversionError::InvalidParameter)
        );
    }

    #[test]
    fn test_calculate_beta_value() {
        // Point taken from the beta curve itself
        let r85 = beta_temperature_to_resistance(85.0, 10_000.0, 3435.0).unwrap();
        let beta = calculate_beta_value(25.0, 10_000.0, 85.0, r85).unwrap();
        assert_relative_eq!(beta, 3435.0, max_relative = 1e-3);
        assert!(validate_beta_value(beta));
    }

    #[cfg(not(feature = "extended-beta-range"))]
    #[test]
    fn test_calculate_beta_value_above_canonical_range() {
        // 565 Ω at 85 °C corresponds to beta ≈ 5114 K
        assert_eq!(
            calculate_beta_value(25.0, 10_000.0, 85.0, 565.0),
            Err(ConversionError::InvalidBeta)
        );
    }

    #[cfg(feature = "extended-beta-range")]
    #[test]
    fn test_calculate_beta_value_extended_range() {
        let beta = calculate_beta_value(25.0, 10_000.0, 85.0, 565.0).unwrap();
        assert_abs_diff_eq!(beta, 5114.0, epsilon = 2.0);
    }

    #[test]
    fn test_calculate_beta_value_rejects_equal_temperatures() {
        assert_eq!(
            calculate_beta_value(25.0, 10_000.0, 25.0, 5_000.0),
            Err(ConversionError::Degenerate)
        );
    }

    #[test]
    fn test_fit_steinhart_hart_recovers_coefficients() {
        let reference = SteinhartHartCoefficients::DEFAULT;
        let points = [32_650.0f32, 10_000.0, 1_200.0].map(|r| {
            let t = reference.resistance_to_temperature(r).unwrap();
            (t, r)
        });

        let fitted = calculate_steinhart_hart_coefficients(points).unwrap();
        assert_relative_eq!(fitted.a, reference.a, max_relative = 1e-2);
        assert_relative_eq!(fitted.b, reference.b, max_relative = 1e-2);

        // The fit must reproduce the temperatures it was built from
        for &(t, r) in &points {
            let back = fitted.resistance_to_temperature(r).unwrap();
            assert_abs_diff_eq!(back, t, epsilon = 0.05);
        }
    }

    #[test]
    fn test_fit_steinhart_hart_rejects_duplicate_temperatures() {
        let points = [(25.0, 10_000.0), (25.0, 9_000.0), (50.0, 3_600.0)];
        assert_eq!(
            calculate_steinhart_hart_coefficients(points),
            Err(ConversionError::Degenerate)
        );
    }

    #[test]
    fn test_temperature_accuracy() {
        let acc = calculate_temperature_accuracy(10_000.0, 0.01, 0.01).unwrap();
        // sqrt(1.0^2 + 0.03435^2)
        assert_abs_diff_eq!(acc, 1.00059, epsilon = 1e-4);

        assert_eq!(
            calculate_temperature_accuracy(10_000.0, 1.5, 0.01),
            Err(ConversionError::InvalidParameter)
        );
    }

    #[test]
    fn test_optimal_series_resistance() {
        let r = calculate_optimal_series_resistance(10_000.0, 0.0, 50.0).unwrap();
        let r0 = beta_temperature_to_resistance(0.0, 10_000.0, 3435.0).unwrap();
        let r50 = beta_temperature_to_resistance(50.0, 10_000.0, 3435.0).unwrap();
        assert_relative_eq!(r, sqrtf(r0 * r50), max_relative = 1e-5);
        assert!(r < r0 && r > r50);

        assert_eq!(
            calculate_optimal_series_resistance(10_000.0, 50.0, 0.0),
            Err(ConversionError::InvalidParameter)
        );
        assert_eq!(
            calculate_optimal_series_resistance(50.0, 0.0, 50.0),
            Err(ConversionError::ResistanceOutOfRange)
        );
    }
}
