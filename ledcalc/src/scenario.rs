//! Battery run time and current draw across converter efficiency scenarios.
//!
//! A boosted circuit is evaluated once per assumed converter efficiency so
//! the advertised figure can be compared against a typical spread. An
//! unboosted circuit produces a single row computed straight from the load.

use crate::boost::{boost_draw, round_to, validate_efficiency};
use crate::runtime::{RunTime, estimate_runtime};
use ledcalc_common::consts::{DEFAULT_EFFICIENCIES, DEFAULT_LED_CURRENT_A};
use ledcalc_common::error::CalcResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Ordered list of assumed boost converter efficiencies.
///
/// Passed explicitly to every summary; the first slot is replaced by the
/// converter's actual efficiency via [`EfficiencyScenarios::with_actual`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EfficiencyScenarios {
    efficiencies: Vec<f64>,
}

impl Default for EfficiencyScenarios {
    fn default() -> Self {
        Self {
            efficiencies: DEFAULT_EFFICIENCIES.to_vec(),
        }
    }
}

impl EfficiencyScenarios {
    /// Build a scenario list, every entry must lie in (0, 1].
    pub fn new(efficiencies: Vec<f64>) -> CalcResult<Self> {
        efficiencies
            .iter()
            .try_for_each(|&e| validate_efficiency(e))?;
        Ok(Self { efficiencies })
    }

    /// Copy of the list with the first slot set to `actual`.
    pub fn with_actual(&self, actual: f64) -> Self {
        let mut efficiencies = self.efficiencies.clone();
        match efficiencies.first_mut() {
            Some(first) => *first = actual,
            None => efficiencies.push(actual),
        }
        Self { efficiencies }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.efficiencies
    }

    pub fn len(&self) -> usize {
        self.efficiencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.efficiencies.is_empty()
    }
}

/// Load current, in amps or milliamps.
///
/// A nonzero `milliamps` takes precedence over `amps` when both are given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCurrent {
    #[serde(default)]
    pub amps: f64,
    #[serde(default)]
    pub milliamps: f64,
}

impl Default for LoadCurrent {
    fn default() -> Self {
        Self {
            amps: DEFAULT_LED_CURRENT_A,
            milliamps: 0.0,
        }
    }
}

impl LoadCurrent {
    pub fn from_amps(amps: f64) -> Self {
        Self {
            amps,
            milliamps: 0.0,
        }
    }

    pub fn from_milliamps(milliamps: f64) -> Self {
        Self {
            amps: 0.0,
            milliamps,
        }
    }

    /// Effective load in amps and whether the milliamp value overrode `amps`.
    pub fn resolve(&self) -> (f64, bool) {
        if self.milliamps != 0.0 {
            (self.milliamps / 1000.0, true)
        } else {
            (self.amps, false)
        }
    }
}

/// Inputs of [`summarize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryInput {
    /// Source (battery) voltage.
    pub supply_v: f64,
    /// Boost converter output voltage.
    pub boost_out_v: f64,
    /// Advertised or measured converter efficiency.
    pub boost_max_efficiency: f64,
    pub battery_mah: u32,
    pub load: LoadCurrent,
    pub boosted: bool,
}

/// One report row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioRow {
    /// Converter efficiency, `None` for an unboosted circuit.
    pub efficiency: Option<f64>,
    pub current_ma: u32,
    pub current_a: f64,
    pub runtime: RunTime,
}

/// Result of [`summarize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub boosted: bool,
    /// The milliamp load value replaced the amp value.
    pub load_ma_override: bool,
    pub rows: Vec<ScenarioRow>,
}

impl Summary {
    /// Text report of the battery run times and current draws.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BATTERY RUN TIMES AND CURRENT DRAWS")?;
        writeln!(f, "********")?;
        if self.load_ma_override {
            writeln!(f, "Ignoring load_amp value(is entered) as mA value was input")?;
        }
        for row in &self.rows {
            match row.efficiency {
                Some(eff) => {
                    writeln!(f, "***Boost converter efficiency of {:.1}%***", eff * 100.0)?;
                    writeln!(f, "Battery Run Time = {}.", row.runtime)?;
                    writeln!(
                        f,
                        "Total current draw including boost converter: {} mA / {} Amps",
                        row.current_ma, row.current_a
                    )?;
                    writeln!(f)?;
                }
                None => {
                    writeln!(f, "Battery Run Time = {}.", row.runtime)?;
                    writeln!(
                        f,
                        "Total current draw: {} mA / {} Amps",
                        row.current_ma, row.current_a
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Battery run time and source current for a load, per efficiency scenario
/// when boosted, or once against the raw load otherwise.
///
/// # Errors
///
/// Any `CalcError` from [`boost_draw`] or [`estimate_runtime`]; notably
/// `InvalidDraw` when the effective load rounds to zero milliamps.
pub fn summarize(input: &SummaryInput, scenarios: &EfficiencyScenarios) -> CalcResult<Summary> {
    let (load_a, load_ma_override) = input.load.resolve();
    if load_ma_override {
        warn!(
            milliamps = input.load.milliamps,
            ignored_amps = input.load.amps,
            "milliamp load given, ignoring amp value"
        );
    }

    let rows = if input.boosted {
        scenarios
            .with_actual(input.boost_max_efficiency)
            .as_slice()
            .iter()
            .map(|&efficiency| {
                let draw = boost_draw(input.supply_v, input.boost_out_v, load_a, efficiency)?;
                let runtime = estimate_runtime(input.battery_mah, f64::from(draw.current_ma))?;
                debug!(efficiency, current_ma = draw.current_ma, %runtime, "scenario evaluated");
                Ok(ScenarioRow {
                    efficiency: Some(efficiency),
                    current_ma: draw.current_ma,
                    current_a: draw.current_a,
                    runtime,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?
    } else {
        let draw_ma = load_a * 1000.0;
        let runtime = estimate_runtime(input.battery_mah, draw_ma)?;
        debug!(draw_ma, %runtime, "direct draw evaluated");
        vec![ScenarioRow {
            efficiency: None,
            current_ma: draw_ma.trunc() as u32,
            current_a: round_to(load_a, 3),
            runtime,
        }]
    };

    Ok(Summary {
        boosted: input.boosted,
        load_ma_override,
        rows,
    })
}
