//! Host delay adapter
//!
//! Lets the driver run on a PC (simulators, bench rigs with a USB ADC)
//! where there is no HAL timer to hand in.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Blocking delay using the OS scheduler
///
/// Sleeps for at least the requested time; the OS may overshoot.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDelay;

impl StdDelay {
    pub const fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_delay_waits_at_least_requested() {
        let mut delay = StdDelay::new();
        let start = Instant::now();
        delay.delay_ms(5);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
