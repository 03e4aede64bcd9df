//! Temperature scale conversions

use super::conversion::KELVIN_OFFSET;

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(celsius: f32) -> f32 {
    celsius + KELVIN_OFFSET
}

pub fn kelvin_to_celsius(kelvin: f32) -> f32 {
    kelvin - KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 1e-5);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-4);
        assert!((celsius_to_fahrenheit(-40.0) + 40.0).abs() < 1e-5);
        assert!((fahrenheit_to_celsius(98.6) - 37.0).abs() < 1e-4);
        assert!((celsius_to_kelvin(0.0) - 273.15).abs() < 1e-4);
        assert!((kelvin_to_celsius(0.0) + 273.15).abs() < 1e-4);
    }
}
