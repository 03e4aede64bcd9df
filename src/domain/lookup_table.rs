//! Lookup table conversion
//!
//! A lookup table is an immutable slice of (resistance, temperature) samples,
//! strictly descending in resistance as temperature rises (NTC behaviour).
//! Conversions interpolate linearly between the two samples that bracket the
//! input.

use heapless::Vec;

use super::conversion::{beta_temperature_to_resistance, ConversionResult, EPSILON};

/// One (resistance, temperature) sample
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LookupEntry {
    /// Resistance in ohms
    pub resistance_ohms: f32,
    /// Temperature in Celsius
    pub temperature_celsius: f32,
}

impl LookupEntry {
    pub const fn new(resistance_ohms: f32, temperature_celsius: f32) -> Self {
        Self {
            resistance_ohms,
            temperature_celsius,
        }
    }
}

/// Error type for lookup table operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LookupError {
    /// Fewer than two entries
    TooFewEntries,
    /// Resistance is not strictly descending
    NotMonotonic,
    /// Resistance outside the table
    ResistanceOutOfRange,
    /// Temperature outside the table
    TemperatureOutOfRange,
    /// No bracketing pair found for the input
    NotFound,
}

impl core::fmt::Display for LookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            LookupError::TooFewEntries => "lookup table needs at least two entries",
            LookupError::NotMonotonic => "lookup table resistance is not strictly descending",
            LookupError::ResistanceOutOfRange => "resistance outside lookup table",
            LookupError::TemperatureOutOfRange => "temperature outside lookup table",
            LookupError::NotFound => "no bracketing lookup entries",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LookupError {}

/// Summary of a table's coverage
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LookupTableStats {
    pub min_resistance: f32,
    pub max_resistance: f32,
    pub min_temperature: f32,
    pub max_temperature: f32,
    pub entry_count: usize,
}

/// Resistance/temperature lookup table
///
/// The bounds are taken from the first (coldest, highest resistance) and last
/// (hottest, lowest resistance) entries when the table is built.
#[derive(Clone, Copy, Debug)]
pub struct LookupTable<'a> {
    entries: &'a [LookupEntry],
    min_resistance: f32,
    max_resistance: f32,
    min_temperature: f32,
    max_temperature: f32,
    resistance_step: f32,
}

impl<'a> LookupTable<'a> {
    /// Build a table over `entries`
    ///
    /// `resistance_step` is the nominal spacing between entries, kept for
    /// reporting only. The table is not validated here; every lookup
    /// validates it first.
    pub const fn new(entries: &'a [LookupEntry], resistance_step: f32) -> Self {
        let (max_resistance, min_temperature, min_resistance, max_temperature) =
            match (entries.first(), entries.last()) {
                (Some(first), Some(last)) => (
                    first.resistance_ohms,
                    first.temperature_celsius,
                    last.resistance_ohms,
                    last.temperature_celsius,
                ),
                _ => (0.0, 0.0, 0.0, 0.0),
            };

        Self {
            entries,
            min_resistance,
            max_resistance,
            min_temperature,
            max_temperature,
            resistance_step,
        }
    }

    pub fn entries(&self) -> &'a [LookupEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resistance_step(&self) -> f32 {
        self.resistance_step
    }

    pub fn stats(&self) -> LookupTableStats {
        LookupTableStats {
            min_resistance: self.min_resistance,
            max_resistance: self.max_resistance,
            min_temperature: self.min_temperature,
            max_temperature: self.max_temperature,
            entry_count: self.entries.len(),
        }
    }

    /// Check the table invariants: at least two entries and strictly
    /// descending resistance
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.entries.len() < 2 {
            return Err(LookupError::TooFewEntries);
        }

        let descending = self
            .entries
            .windows(2)
            .all(|pair| pair[1].resistance_ohms < pair[0].resistance_ohms);
        if !descending {
            return Err(LookupError::NotMonotonic);
        }

        Ok(())
    }

    /// Interpolated temperature for `resistance_ohms`
    pub fn find_temperature(&self, resistance_ohms: f32) -> Result<f32, LookupError> {
        self.validate()?;

        if !(self.min_resistance..=self.max_resistance).contains(&resistance_ohms) {
            return Err(LookupError::ResistanceOutOfRange);
        }

        let (lower, upper) = self.bracket_resistance(resistance_ohms);
        let (entry1, entry2) = (self.entries[lower], self.entries[upper]);
        Ok(interpolate_temperature(entry1, entry2, resistance_ohms))
    }

    /// Interpolated resistance for `temperature_celsius`
    ///
    /// Walks the table linearly in ascending temperature order.
    pub fn find_resistance(&self, temperature_celsius: f32) -> Result<f32, LookupError> {
        self.validate()?;

        if !(self.min_temperature..=self.max_temperature).contains(&temperature_celsius) {
            return Err(LookupError::TemperatureOutOfRange);
        }

        let (entry1, entry2) = self
            .entries
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .find(|(e1, e2)| {
                e1.temperature_celsius <= temperature_celsius
                    && e2.temperature_celsius >= temperature_celsius
            })
            .ok_or(LookupError::NotFound)?;

        let temp_diff = entry2.temperature_celsius - entry1.temperature_celsius;
        if libm::fabsf(temp_diff) < EPSILON {
            return Ok(entry1.resistance_ohms);
        }

        let ratio = (temperature_celsius - entry1.temperature_celsius) / temp_diff;
        Ok(entry1.resistance_ohms + ratio * (entry2.resistance_ohms - entry1.resistance_ohms))
    }

    /// Indices of the entries bracketing `resistance_ohms`
    ///
    /// Binary search over the descending resistance column. An exact match
    /// (within [`EPSILON`]) returns the same index twice. Callers must have
    /// validated the table and range-checked the input.
    fn bracket_resistance(&self, resistance_ohms: f32) -> (usize, usize) {
        let entries = self.entries;
        let is_match = |i: usize| libm::fabsf(entries[i].resistance_ohms - resistance_ohms) < EPSILON;

        // Invariant: entries[lo] >= resistance >= entries[hi]
        let mut lo = 0;
        let mut hi = entries.len() - 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if is_match(mid) {
                return (mid, mid);
            }
            if entries[mid].resistance_ohms > resistance_ohms {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if is_match(lo) {
            (lo, lo)
        } else if is_match(hi) {
            (hi, hi)
        } else {
            (lo, hi)
        }
    }
}

/// Linear interpolation of temperature between two entries by resistance
pub fn interpolate_temperature(entry1: LookupEntry, entry2: LookupEntry, resistance_ohms: f32) -> f32 {
    let resistance_diff = entry2.resistance_ohms - entry1.resistance_ohms;
    if libm::fabsf(resistance_diff) < EPSILON {
        return entry1.temperature_celsius;
    }

    let ratio = (resistance_ohms - entry1.resistance_ohms) / resistance_diff;
    entry1.temperature_celsius + ratio * (entry2.temperature_celsius - entry1.temperature_celsius)
}

/// Build a table from the beta model
///
/// Samples `N` points starting at `start_celsius` in `step_celsius`
/// increments. Use this for parts that have no compiled-in table.
pub fn generate_beta_table<const N: usize>(
    resistance_at_25c: f32,
    beta: f32,
    start_celsius: f32,
    step_celsius: f32,
) -> ConversionResult<Vec<LookupEntry, N>> {
    let mut entries = Vec::new();
    for i in 0..N {
        let temperature = start_celsius + step_celsius * i as f32;
        let resistance = beta_temperature_to_resistance(temperature, resistance_at_25c, beta)?;
        // Capacity is N, so this push cannot fail
        let _ = entries.push(LookupEntry::new(resistance, temperature));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [LookupEntry; 4] = [
        LookupEntry::new(400.0, 0.0),
        LookupEntry::new(200.0, 10.0),
        LookupEntry::new(100.0, 20.0),
        LookupEntry::new(50.0, 30.0),
    ];

    #[test]
    fn test_bounds_from_entries() {
        let table = LookupTable::new(&SMALL, 10.0);
        let stats = table.stats();
        assert_eq!(stats.max_resistance, 400.0);
        assert_eq!(stats.min_resistance, 50.0);
        assert_eq!(stats.min_temperature, 0.0);
        assert_eq!(stats.max_temperature, 30.0);
        assert_eq!(stats.entry_count, 4);
    }

    #[test]
    fn test_find_temperature_interpolates() {
        let table = LookupTable::new(&SMALL, 10.0);
        assert_eq!(table.find_temperature(150.0), Ok(15.0));
        assert_eq!(table.find_temperature(300.0), Ok(5.0));
        assert_eq!(table.find_temperature(75.0), Ok(25.0));
    }

    #[test]
    fn test_find_temperature_exact_entries() {
        let table = LookupTable::new(&SMALL, 10.0);
        for entry in SMALL.iter() {
            assert_eq!(
                table.find_temperature(entry.resistance_ohms),
                Ok(entry.temperature_celsius)
            );
        }
    }

    #[test]
    fn test_find_resistance_interpolates() {
        let table = LookupTable::new(&SMALL, 10.0);
        assert_eq!(table.find_resistance(5.0), Ok(300.0));
        assert_eq!(table.find_resistance(20.0), Ok(100.0));
        assert_eq!(table.find_resistance(30.0), Ok(50.0));
    }

    #[test]
    fn test_out_of_range() {
        let table = LookupTable::new(&SMALL, 10.0);
        assert_eq!(table.find_temperature(401.0), Err(LookupError::ResistanceOutOfRange));
        assert_eq!(table.find_temperature(49.0), Err(LookupError::ResistanceOutOfRange));
        assert_eq!(table.find_resistance(-1.0), Err(LookupError::TemperatureOutOfRange));
        assert_eq!(table.find_resistance(31.0), Err(LookupError::TemperatureOutOfRange));
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let table = LookupTable::new(&SMALL, 10.0);
        assert_eq!(table.find_temperature(f32::NAN), Err(LookupError::ResistanceOutOfRange));
        assert_eq!(table.find_resistance(f32::NAN), Err(LookupError::TemperatureOutOfRange));
    }

    #[test]
    fn test_validate_rejects_non_descending() {
        let ascending = [
            LookupEntry::new(100.0, 0.0),
            LookupEntry::new(200.0, 10.0),
            LookupEntry::new(300.0, 20.0),
        ];
        let table = LookupTable::new(&ascending, 100.0);
        assert_eq!(table.validate(), Err(LookupError::NotMonotonic));
        assert_eq!(table.find_temperature(150.0), Err(LookupError::NotMonotonic));

        let flat = [LookupEntry::new(100.0, 0.0), LookupEntry::new(100.0, 10.0)];
        let table = LookupTable::new(&flat, 0.0);
        assert_eq!(table.validate(), Err(LookupError::NotMonotonic));
    }

    #[test]
    fn test_validate_rejects_short_tables() {
        let single = [LookupEntry::new(100.0, 0.0)];
        assert_eq!(LookupTable::new(&single, 0.0).validate(), Err(LookupError::TooFewEntries));
        assert_eq!(LookupTable::new(&[], 0.0).validate(), Err(LookupError::TooFewEntries));
    }

    #[test]
    fn test_generate_beta_table() {
        let entries = generate_beta_table::<11>(10_000.0, 3435.0, 0.0, 5.0).unwrap();
        assert_eq!(entries.len(), 11);

        let table = LookupTable::new(&entries, 0.0);
        table.validate().unwrap();

        let t = table.find_temperature(10_000.0).unwrap();
        assert!((t - 25.0).abs() < 0.01);
    }
}
