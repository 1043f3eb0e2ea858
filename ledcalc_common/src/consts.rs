//! Workspace-wide constants for ledcalc.
//!
//! Single source of truth for the standard resistor catalog, the default
//! boost converter efficiency spread and the built-in demo circuit.

use static_assertions::{const_assert, const_assert_eq};

/// Number of base values in one E24 decade.
pub const E24_BASE_COUNT: usize = 24;

/// Number of decades covered by the catalog (1 Ω to 9.1 MΩ).
pub const DECADE_COUNT: usize = 7;

/// Standard E24 resistor values in ohms, every decade from 1 Ω to 9.1 MΩ,
/// sorted ascending.
pub const RESISTOR_CATALOG: [f64; E24_BASE_COUNT * DECADE_COUNT] = [
    // 1 Ω decade
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
    // 10 Ω decade
    10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0,
    43.0, 47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0,
    // 100 Ω decade
    100.0, 110.0, 120.0, 130.0, 150.0, 160.0, 180.0, 200.0, 220.0, 240.0, 270.0, 300.0, 330.0,
    360.0, 390.0, 430.0, 470.0, 510.0, 560.0, 620.0, 680.0, 750.0, 820.0, 910.0,
    // 1 kΩ decade
    1_000.0, 1_100.0, 1_200.0, 1_300.0, 1_500.0, 1_600.0, 1_800.0, 2_000.0, 2_200.0, 2_400.0,
    2_700.0, 3_000.0, 3_300.0, 3_600.0, 3_900.0, 4_300.0, 4_700.0, 5_100.0, 5_600.0, 6_200.0,
    6_800.0, 7_500.0, 8_200.0, 9_100.0,
    // 10 kΩ decade
    10_000.0, 11_000.0, 12_000.0, 13_000.0, 15_000.0, 16_000.0, 18_000.0, 20_000.0, 22_000.0,
    24_000.0, 27_000.0, 30_000.0, 33_000.0, 36_000.0, 39_000.0, 43_000.0, 47_000.0, 51_000.0,
    56_000.0, 62_000.0, 68_000.0, 75_000.0, 82_000.0, 91_000.0,
    // 100 kΩ decade
    100_000.0, 110_000.0, 120_000.0, 130_000.0, 150_000.0, 160_000.0, 180_000.0, 200_000.0,
    220_000.0, 240_000.0, 270_000.0, 300_000.0, 330_000.0, 360_000.0, 390_000.0, 430_000.0,
    470_000.0, 510_000.0, 560_000.0, 620_000.0, 680_000.0, 750_000.0, 820_000.0, 910_000.0,
    // 1 MΩ decade
    1_000_000.0, 1_100_000.0, 1_200_000.0, 1_300_000.0, 1_500_000.0, 1_600_000.0, 1_800_000.0,
    2_000_000.0, 2_200_000.0, 2_400_000.0, 2_700_000.0, 3_000_000.0, 3_300_000.0, 3_600_000.0,
    3_900_000.0, 4_300_000.0, 4_700_000.0, 5_100_000.0, 5_600_000.0, 6_200_000.0, 6_800_000.0,
    7_500_000.0, 8_200_000.0, 9_100_000.0,
];

/// Largest value available in [`RESISTOR_CATALOG`].
pub const MAX_CATALOG_OHMS: f64 = RESISTOR_CATALOG[RESISTOR_CATALOG.len() - 1];

/// Multiplier applied to the ideal resistance before the catalog lookup.
pub const SAFETY_MARGIN: f64 = 1.05;

/// Resistance returned when the ideal value is exactly zero.
///
/// Never 0 Ω: a branch without a limiter is a short across the LEDs.
pub const NOMINAL_MIN_OHMS: f64 = 1.0;

/// Default boost converter efficiency spread: best, likely and worst case.
///
/// The first slot is replaced by the converter's advertised maximum
/// efficiency when a summary is computed.
pub const DEFAULT_EFFICIENCIES: [f64; 3] = [0.94, 0.82, 0.5];

/// Typical 5 mm indicator LED current (20 mA).
pub const DEFAULT_LED_CURRENT_A: f64 = 0.02;

// ─── Demo circuit ───────────────────────────────────────────────────
// 15 red LEDs on a 9 V battery, boost converter present but disabled.

/// Demo circuit supply voltage.
pub const DEMO_SUPPLY_V: f64 = 9.0;

/// Demo circuit LED forward voltage.
pub const DEMO_LED_FORWARD_V: f64 = 1.5;

/// Demo circuit LED count.
pub const DEMO_LED_COUNT: u32 = 15;

/// Demo circuit boost converter output voltage.
pub const DEMO_BOOST_OUTPUT_V: f64 = 18.0;

/// Demo circuit boost converter maximum efficiency.
pub const DEMO_BOOST_EFFICIENCY: f64 = 0.9;

/// Demo circuit battery capacity in mAh.
pub const DEMO_BATTERY_MAH: u32 = 2300;

const fn is_strictly_ascending(values: &[f64]) -> bool {
    let mut i = 1;
    while i < values.len() {
        if values[i] <= values[i - 1] {
            return false;
        }
        i += 1;
    }
    true
}

const_assert!(is_strictly_ascending(&RESISTOR_CATALOG));
const_assert_eq!(RESISTOR_CATALOG.len(), 168);
const_assert!(NOMINAL_MIN_OHMS > 0.0);
const_assert!(SAFETY_MARGIN >= 1.0);
