//! Current limiting resistor selection.
//!
//! The ideal series resistance for a branch follows from Ohm's law. It is
//! rounded up to a whole ohm, inflated by [`SAFETY_MARGIN`] and then snapped
//! to the next standard value in [`RESISTOR_CATALOG`]. The result is never
//! smaller than the inflated ideal: an undersized limiter over-drives the LEDs.

use ledcalc_common::consts::{MAX_CATALOG_OHMS, NOMINAL_MIN_OHMS, RESISTOR_CATALOG, SAFETY_MARGIN};
use ledcalc_common::error::{CalcError, CalcResult};
use tracing::trace;

/// Smallest catalog value greater than or equal to `ohms`.
///
/// # Errors
///
/// `CalcError::OutOfRange` when `ohms` exceeds the largest catalog value.
pub fn next_standard_value(ohms: f64) -> CalcResult<f64> {
    let idx = RESISTOR_CATALOG.partition_point(|&r| r < ohms);
    RESISTOR_CATALOG
        .get(idx)
        .copied()
        .ok_or(CalcError::OutOfRange {
            requested_ohms: ohms,
            max_ohms: MAX_CATALOG_OHMS,
        })
}

/// Select the current limiting resistor for one branch of series LEDs.
///
/// `ideal = ceil((supply_v - led_forward_v * leds_on_branch) / led_current_a)`.
/// An ideal of exactly 0 Ω yields [`NOMINAL_MIN_OHMS`]; anything else is
/// inflated by [`SAFETY_MARGIN`] and looked up with [`next_standard_value`].
///
/// # Errors
///
/// - `CalcError::InvalidDraw` if `led_current_a` is not a positive number
/// - `CalcError::InvalidVoltageConfiguration` if the LEDs need more voltage
///   than the supply provides
/// - `CalcError::OutOfRange` if no catalog value is large enough
pub fn select_resistor(
    supply_v: f64,
    led_forward_v: f64,
    leds_on_branch: u32,
    led_current_a: f64,
) -> CalcResult<f64> {
    if !(led_current_a.is_finite() && led_current_a > 0.0) {
        return Err(CalcError::InvalidDraw(led_current_a));
    }

    let branch_v = led_forward_v * f64::from(leds_on_branch);
    let ideal = ((supply_v - branch_v) / led_current_a).ceil();
    // An exact fit can land a few ULP below zero; ceil() brings it to -0.0.
    if ideal == 0.0 {
        trace!(leds_on_branch, "ideal resistance is 0 Ω, using nominal floor");
        return Ok(NOMINAL_MIN_OHMS);
    }
    if !ideal.is_finite() || ideal < 0.0 {
        return Err(CalcError::InvalidVoltageConfiguration {
            supply_v,
            load_v: branch_v,
        });
    }

    let inflated = ideal * SAFETY_MARGIN;
    let selected = next_standard_value(inflated)?;
    trace!(ideal, inflated, selected, leds_on_branch, "resistor selected");
    Ok(selected)
}
