//! Compiled-in lookup tables and the per-part registry

use super::config::NtcType;
use super::lookup_table::{LookupEntry, LookupTable};

/// Look up the compiled-in table for a thermistor part
///
/// Returns `None` for [`NtcType::Custom`] and [`NtcType::Unknown`]; callers
/// fall back to the mathematical models.
pub fn lookup_table_for(ntc_type: NtcType) -> Option<&'static LookupTable<'static>> {
    match ntc_type {
        NtcType::NtcG163Jft103Ft1S => Some(&NTCG163JFT103FT1S),
        NtcType::NtcG164Jf103Ft1S => Some(&NTCG164JF103FT1S),
        NtcType::NtcG163Jf103Ft1S => Some(&NTCG163JF103FT1S),
        NtcType::Custom | NtcType::Unknown => None,
    }
}

/// Average resistance spacing of [`TABLE_10K_3435`] (Ω)
const TABLE_10K_3435_STEP: f32 = 1501.35;

/// NTCG163JFT103FT1S (10 kΩ, β = 3435 K)
pub static NTCG163JFT103FT1S: LookupTable<'static> = LookupTable::new(&TABLE_10K_3435, TABLE_10K_3435_STEP);

/// NTCG164JF103FT1S shares the NTCG163JFT103FT1S curve
pub static NTCG164JF103FT1S: LookupTable<'static> = LookupTable::new(&TABLE_10K_3435, TABLE_10K_3435_STEP);

/// NTCG163JF103FT1S shares the NTCG163JFT103FT1S curve
pub static NTCG163JF103FT1S: LookupTable<'static> = LookupTable::new(&TABLE_10K_3435, TABLE_10K_3435_STEP);

/// 10 kΩ / 3435 K curve, -40 °C to 125 °C in 1 °C steps
#[rustfmt::skip]
static TABLE_10K_3435: [LookupEntry; 166] = [
    LookupEntry::new(248276.5, -40.0),
    LookupEntry::new(233136.0, -39.0),
    LookupEntry::new(219035.9, -38.0),
    LookupEntry::new(205897.4, -37.0),
    LookupEntry::new(193648.0, -36.0),
    LookupEntry::new(182221.2, -35.0),
    LookupEntry::new(171555.9, -34.0),
    LookupEntry::new(161595.9, -33.0),
    LookupEntry::new(152289.8, -32.0),
    LookupEntry::new(143589.8, -31.0),
    LookupEntry::new(135452.5, -30.0),
    LookupEntry::new(127837.3, -29.0),
    LookupEntry::new(120707.2, -28.0),
    LookupEntry::new(114028.0, -27.0),
    LookupEntry::new(107768.0, -26.0),
    LookupEntry::new(101898.0, -25.0),
    LookupEntry::new(96391.1, -24.0),
    LookupEntry::new(91222.3, -23.0),
    LookupEntry::new(86368.6, -22.0),
    LookupEntry::new(81808.6, -21.0),
    LookupEntry::new(77522.5, -20.0),
    LookupEntry::new(73492.2, -19.0),
    LookupEntry::new(69700.5, -18.0),
    LookupEntry::new(66131.8, -17.0),
    LookupEntry::new(62771.5, -16.0),
    LookupEntry::new(59606.0, -15.0),
    LookupEntry::new(56622.7, -14.0),
    LookupEntry::new(53810.0, -13.0),
    LookupEntry::new(51157.0, -12.0),
    LookupEntry::new(48653.5, -11.0),
    LookupEntry::new(46290.2, -10.0),
    LookupEntry::new(44058.3, -9.0),
    LookupEntry::new(41949.6, -8.0),
    LookupEntry::new(39956.6, -7.0),
    LookupEntry::new(38072.2, -6.0),
    LookupEntry::new(36289.7, -5.0),
    LookupEntry::new(34602.9, -4.0),
    LookupEntry::new(33006.2, -3.0),
    LookupEntry::new(31494.2, -2.0),
    LookupEntry::new(30061.8, -1.0),
    LookupEntry::new(28704.3, 0.0),
    LookupEntry::new(27417.3, 1.0),
    LookupEntry::new(26196.8, 2.0),
    LookupEntry::new(25038.9, 3.0),
    LookupEntry::new(23940.0, 4.0),
    LookupEntry::new(22896.6, 5.0),
    LookupEntry::new(21905.8, 6.0),
    LookupEntry::new(20964.4, 7.0),
    LookupEntry::new(20069.8, 8.0),
    LookupEntry::new(19219.3, 9.0),
    LookupEntry::new(18410.4, 10.0),
    LookupEntry::new(17641.0, 11.0),
    LookupEntry::new(16908.7, 12.0),
    LookupEntry::new(16211.7, 13.0),
    LookupEntry::new(15547.9, 14.0),
    LookupEntry::new(14915.7, 15.0),
    LookupEntry::new(14313.3, 16.0),
    LookupEntry::new(13739.1, 17.0),
    LookupEntry::new(13191.6, 18.0),
    LookupEntry::new(12669.5, 19.0),
    LookupEntry::new(12171.4, 20.0),
    LookupEntry::new(11696.1, 21.0),
    LookupEntry::new(11242.4, 22.0),
    LookupEntry::new(10809.1, 23.0),
    LookupEntry::new(10395.3, 24.0),
    LookupEntry::new(10000.0, 25.0),
    LookupEntry::new(9622.2, 26.0),
    LookupEntry::new(9261.0, 27.0),
    LookupEntry::new(8915.7, 28.0),
    LookupEntry::new(8585.4, 29.0),
    LookupEntry::new(8269.4, 30.0),
    LookupEntry::new(7967.0, 31.0),
    LookupEntry::new(7677.5, 32.0),
    LookupEntry::new(7400.4, 33.0),
    LookupEntry::new(7134.9, 34.0),
    LookupEntry::new(6880.6, 35.0),
    LookupEntry::new(6636.9, 36.0),
    LookupEntry::new(6403.4, 37.0),
    LookupEntry::new(6179.5, 38.0),
    LookupEntry::new(5964.7, 39.0),
    LookupEntry::new(5758.8, 40.0),
    LookupEntry::new(5561.2, 41.0),
    LookupEntry::new(5371.5, 42.0),
    LookupEntry::new(5189.5, 43.0),
    LookupEntry::new(5014.7, 44.0),
    LookupEntry::new(4846.9, 45.0),
    LookupEntry::new(4685.6, 46.0),
    LookupEntry::new(4530.7, 47.0),
    LookupEntry::new(4381.9, 48.0),
    LookupEntry::new(4238.8, 49.0),
    LookupEntry::new(4101.2, 50.0),
    LookupEntry::new(3968.9, 51.0),
    LookupEntry::new(3841.6, 52.0),
    LookupEntry::new(3719.2, 53.0),
    LookupEntry::new(3601.4, 54.0),
    LookupEntry::new(3487.9, 55.0),
    LookupEntry::new(3378.8, 56.0),
    LookupEntry::new(3273.6, 57.0),
    LookupEntry::new(3172.4, 58.0),
    LookupEntry::new(3074.8, 59.0),
    LookupEntry::new(2980.9, 60.0),
    LookupEntry::new(2890.3, 61.0),
    LookupEntry::new(2803.0, 62.0),
    LookupEntry::new(2718.8, 63.0),
    LookupEntry::new(2637.6, 64.0),
    LookupEntry::new(2559.3, 65.0),
    LookupEntry::new(2483.8, 66.0),
    LookupEntry::new(2411.0, 67.0),
    LookupEntry::new(2340.6, 68.0),
    LookupEntry::new(2272.8, 69.0),
    LookupEntry::new(2207.2, 70.0),
    LookupEntry::new(2144.0, 71.0),
    LookupEntry::new(2082.8, 72.0),
    LookupEntry::new(2023.8, 73.0),
    LookupEntry::new(1966.8, 74.0),
    LookupEntry::new(1911.7, 75.0),
    LookupEntry::new(1858.4, 76.0),
    LookupEntry::new(1806.9, 77.0),
    LookupEntry::new(1757.1, 78.0),
    LookupEntry::new(1709.0, 79.0),
    LookupEntry::new(1662.4, 80.0),
    LookupEntry::new(1617.4, 81.0),
    LookupEntry::new(1573.8, 82.0),
    LookupEntry::new(1531.7, 83.0),
    LookupEntry::new(1490.8, 84.0),
    LookupEntry::new(1451.3, 85.0),
    LookupEntry::new(1413.1, 86.0),
    LookupEntry::new(1376.1, 87.0),
    LookupEntry::new(1340.2, 88.0),
    LookupEntry::new(1305.5, 89.0),
    LookupEntry::new(1271.8, 90.0),
    LookupEntry::new(1239.2, 91.0),
    LookupEntry::new(1207.6, 92.0),
    LookupEntry::new(1177.0, 93.0),
    LookupEntry::new(1147.3, 94.0),
    LookupEntry::new(1118.5, 95.0),
    LookupEntry::new(1090.6, 96.0),
    LookupEntry::new(1063.5, 97.0),
    LookupEntry::new(1037.2, 98.0),
    LookupEntry::new(1011.8, 99.0),
    LookupEntry::new(987.0, 100.0),
    LookupEntry::new(963.0, 101.0),
    LookupEntry::new(939.8, 102.0),
    LookupEntry::new(917.2, 103.0),
    LookupEntry::new(895.2, 104.0),
    LookupEntry::new(873.9, 105.0),
    LookupEntry::new(853.2, 106.0),
    LookupEntry::new(833.1, 107.0),
    LookupEntry::new(813.6, 108.0),
    LookupEntry::new(794.7, 109.0),
    LookupEntry::new(776.2, 110.0),
    LookupEntry::new(758.3, 111.0),
    LookupEntry::new(740.9, 112.0),
    LookupEntry::new(724.0, 113.0),
    LookupEntry::new(707.6, 114.0),
    LookupEntry::new(691.6, 115.0),
    LookupEntry::new(676.0, 116.0),
    LookupEntry::new(660.9, 117.0),
    LookupEntry::new(646.2, 118.0),
    LookupEntry::new(631.9, 119.0),
    LookupEntry::new(618.0, 120.0),
    LookupEntry::new(604.4, 121.0),
    LookupEntry::new(591.2, 122.0),
    LookupEntry::new(578.4, 123.0),
    LookupEntry::new(565.9, 124.0),
    LookupEntry::new(553.7, 125.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversion::beta_resistance_to_temperature;

    #[test]
    fn test_registry() {
        assert!(lookup_table_for(NtcType::NtcG163Jft103Ft1S).is_some());
        assert!(lookup_table_for(NtcType::NtcG164Jf103Ft1S).is_some());
        assert!(lookup_table_for(NtcType::NtcG163Jf103Ft1S).is_some());
        assert!(lookup_table_for(NtcType::Custom).is_none());
        assert!(lookup_table_for(NtcType::Unknown).is_none());
    }

    #[test]
    fn test_compiled_tables_are_valid() {
        for table in [&NTCG163JFT103FT1S, &NTCG164JF103FT1S, &NTCG163JF103FT1S] {
            table.validate().unwrap();
            let stats = table.stats();
            assert_eq!(stats.entry_count, 166);
            assert_eq!(stats.min_temperature, -40.0);
            assert_eq!(stats.max_temperature, 125.0);
        }
    }

    #[test]
    fn test_lookup_consistency_at_table_points() {
        let table = &NTCG163JFT103FT1S;
        for entry in table.entries() {
            let t = table.find_temperature(entry.resistance_ohms).unwrap();
            assert!((t - entry.temperature_celsius).abs() < 1e-3);

            let r = table.find_resistance(entry.temperature_celsius).unwrap();
            assert!((r - entry.resistance_ohms).abs() / entry.resistance_ohms < 1e-4);
        }
    }

    #[test]
    fn test_table_matches_beta_model() {
        let table = &NTCG163JFT103FT1S;
        for &r in &[600.0f32, 1_234.0, 5_000.0, 10_000.0, 33_000.0, 150_000.0] {
            let from_table = table.find_temperature(r).unwrap();
            let from_beta = beta_resistance_to_temperature(r, 10_000.0, 3435.0).unwrap();
            assert!(
                (from_table - from_beta).abs() < 0.05,
                "table {} vs beta {} at {} ohms",
                from_table,
                from_beta,
                r
            );
        }
    }
}
