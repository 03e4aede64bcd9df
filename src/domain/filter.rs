//! Exponential moving average over successive readings

/// EMA state
///
/// The first sample after construction or [`EmaFilter::reset`] seeds the
/// filter and passes through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmaFilter {
    value: f32,
    seeded: bool,
}

impl EmaFilter {
    pub const fn new() -> Self {
        Self {
            value: 0.0,
            seeded: false,
        }
    }

    /// Forget the filtered value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether a sample has been seen since the last reset
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Current filtered value, if seeded
    pub fn value(&self) -> Option<f32> {
        self.seeded.then_some(self.value)
    }

    /// Feed `sample` with weight `alpha` and return the filtered value
    pub fn apply(&mut self, sample: f32, alpha: f32) -> f32 {
        if self.seeded {
            self.value = alpha * sample + (1.0 - alpha) * self.value;
        } else {
            self.value = sample;
            self.seeded = true;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_seeds() {
        let mut filter = EmaFilter::new();
        assert_eq!(filter.value(), None);
        assert_eq!(filter.apply(20.0, 0.1), 20.0);
        assert!(filter.is_seeded());
    }

    #[test]
    fn test_smoothing() {
        let mut filter = EmaFilter::new();
        filter.apply(20.0, 0.5);
        let out = filter.apply(30.0, 0.5);
        assert!((out - 25.0).abs() < 1e-6);

        // alpha = 1 tracks the input, alpha = 0 holds the first value
        assert_eq!(filter.apply(40.0, 1.0), 40.0);
        assert_eq!(filter.apply(10.0, 0.0), 40.0);
    }

    #[test]
    fn test_reset() {
        let mut filter = EmaFilter::new();
        filter.apply(20.0, 0.1);
        filter.reset();
        assert!(!filter.is_seeded());
        assert_eq!(filter.apply(50.0, 0.1), 50.0);
    }
}
