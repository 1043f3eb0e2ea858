//! Parallel branch layout planning.
//!
//! LEDs are packed in series up to the number the supply can drive, the
//! leftover LEDs go on a single shorter branch. Every branch gets its own
//! current limiting resistor and draws the rated LED current.

use crate::resistor::select_resistor;
use ledcalc_common::error::{CalcError, CalcResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Glyph for one LED in series, including its leads.
const LED_GLYPH: &str = "─⩍─";

/// Bare wire the width of one [`LED_GLYPH`].
const WIRE_GLYPH: &str = "───";

/// Supply label suffix before the first junction.
const SUPPLY_SUFFIX: &str = "V+─";

/// One parallel branch of series LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Branch {
    /// LEDs in series on this branch.
    pub leds: u32,
    /// Selected current limiting resistor in ohms.
    pub resistor_ohms: f64,
}

/// Result of [`plan_layout`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Voltage feeding the branches (boost output when boosted).
    pub supply_v: f64,
    /// Maximum LEDs that fit in series on one branch.
    pub max_per_branch: u32,
    /// Branches holding `max_per_branch` LEDs.
    pub full_branches: u32,
    /// LEDs on the trailing short branch, 0 if there is none.
    pub remainder: u32,
    /// Full branches first, then the remainder branch if any.
    pub branches: Vec<Branch>,
    /// Rated LED current summed once per branch.
    pub total_current_a: f64,
}

impl Layout {
    /// Total number of LEDs across all branches.
    pub fn led_count(&self) -> u32 {
        self.branches.iter().map(|b| b.leds).sum()
    }

    /// Text diagram of the circuit.
    pub fn diagram(&self) -> String {
        self.to_string()
    }

    fn junction(&self, index: usize) -> char {
        let last = self.branches.len().saturating_sub(1);
        match index {
            0 if last == 0 => '─',
            0 => '┬',
            i if i == last => '└',
            _ => '├',
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max LED's per parallel line: {} LED's", self.max_per_branch)?;
        writeln!(
            f,
            "Total parallel wires with max LED's: {} parallel wires",
            self.full_branches
        )?;
        if self.remainder > 0 {
            writeln!(f, "wire with any remaining LED's: {}", self.remainder)?;
        }

        let label = format!("{}{}", self.supply_v, SUPPLY_SUFFIX);
        let indent = " ".repeat(label.chars().count());
        for (i, branch) in self.branches.iter().enumerate() {
            let prefix = if i == 0 { label.as_str() } else { indent.as_str() };
            let padding = self.max_per_branch.saturating_sub(branch.leds) as usize;
            writeln!(
                f,
                "{prefix}{}{}{}[{}Ω]─",
                self.junction(i),
                LED_GLYPH.repeat(branch.leds as usize),
                WIRE_GLYPH.repeat(padding),
                branch.resistor_ohms
            )?;
        }
        writeln!(f, "END OF CIRCUIT")
    }
}

/// Partition `led_count` LEDs into parallel branches.
///
/// # Errors
///
/// - `CalcError::InvalidVoltageConfiguration` if not even one LED fits on a
///   branch (forward voltage above supply, or non-positive voltages)
/// - any error from [`select_resistor`]
pub fn plan_layout(
    supply_v: f64,
    led_forward_v: f64,
    led_count: u32,
    led_current_a: f64,
) -> CalcResult<Layout> {
    let invalid = CalcError::InvalidVoltageConfiguration {
        supply_v,
        load_v: led_forward_v,
    };
    if !(supply_v.is_finite() && led_forward_v.is_finite() && supply_v > 0.0 && led_forward_v > 0.0)
    {
        return Err(invalid);
    }

    let fit = (supply_v / led_forward_v).floor();
    if fit < 1.0 || fit > f64::from(u32::MAX) {
        return Err(invalid);
    }
    let max_per_branch = fit as u32;
    let full_branches = led_count / max_per_branch;
    let remainder = led_count % max_per_branch;

    let sizes = std::iter::repeat_n(max_per_branch, full_branches as usize)
        .chain((remainder > 0).then_some(remainder));

    let mut branches = Vec::with_capacity(full_branches as usize + 1);
    let mut total_current_a = 0.0;
    for leds in sizes {
        let resistor_ohms = select_resistor(supply_v, led_forward_v, leds, led_current_a)?;
        total_current_a += led_current_a;
        branches.push(Branch {
            leds,
            resistor_ohms,
        });
    }

    debug!(
        max_per_branch,
        full_branches, remainder, total_current_a, "layout planned"
    );

    Ok(Layout {
        supply_v,
        max_per_branch,
        full_branches,
        remainder,
        branches,
        total_current_a,
    })
}
