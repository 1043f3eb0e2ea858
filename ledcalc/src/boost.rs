//! Source-side current draw through a boost converter.
//!
//! A converter stepping `supply_v` up to the LED-side voltage draws
//! `load * v_out / (supply_v * efficiency)` from the source.

use ledcalc_common::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Voltage the boost converter has to deliver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputVoltage {
    /// Known total output voltage.
    Total(f64),
    /// Forward voltages of LEDs chained in series, summed into the total.
    Chain(Vec<f64>),
}

impl OutputVoltage {
    /// Total output voltage in volts.
    pub fn total(&self) -> f64 {
        match self {
            Self::Total(v) => *v,
            Self::Chain(vs) => vs.iter().sum(),
        }
    }
}

impl From<f64> for OutputVoltage {
    fn from(v: f64) -> Self {
        Self::Total(v)
    }
}

impl From<Vec<f64>> for OutputVoltage {
    fn from(vs: Vec<f64>) -> Self {
        Self::Chain(vs)
    }
}

impl From<&[f64]> for OutputVoltage {
    fn from(vs: &[f64]) -> Self {
        Self::Chain(vs.to_vec())
    }
}

/// Current drawn from the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoostDraw {
    /// Whole milliamps, derived from the rounded amp value.
    pub current_ma: u32,
    /// Amps rounded to two decimal places.
    pub current_a: f64,
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Check that `efficiency` lies in (0, 1].
pub fn validate_efficiency(efficiency: f64) -> CalcResult<()> {
    if efficiency.is_finite() && efficiency > 0.0 && efficiency <= 1.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidEfficiency(efficiency))
    }
}

/// Current drawn from a `supply_v` source feeding `load_current_a` at
/// `voltage_out` through a converter of the given efficiency.
///
/// # Errors
///
/// - `CalcError::InvalidEfficiency` if `efficiency` is outside (0, 1]
/// - `CalcError::InvalidVoltageConfiguration` if `supply_v` or the output
///   voltage is not a positive number
/// - `CalcError::InvalidDraw` if `load_current_a` is negative or not finite
pub fn boost_draw(
    supply_v: f64,
    voltage_out: impl Into<OutputVoltage>,
    load_current_a: f64,
    efficiency: f64,
) -> CalcResult<BoostDraw> {
    validate_efficiency(efficiency)?;

    let v_out = voltage_out.into().total();
    if !(supply_v.is_finite() && supply_v > 0.0 && v_out.is_finite() && v_out > 0.0) {
        return Err(CalcError::InvalidVoltageConfiguration {
            supply_v,
            load_v: v_out,
        });
    }
    if !(load_current_a.is_finite() && load_current_a >= 0.0) {
        return Err(CalcError::InvalidDraw(load_current_a));
    }

    let current_a = round_to(load_current_a * v_out / (supply_v * efficiency), 2);
    let current_ma = (current_a * 1000.0).round() as u32;
    Ok(BoostDraw {
        current_ma,
        current_a,
    })
}
