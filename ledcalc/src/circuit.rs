//! Whole-circuit calculation: branch layout followed by the run time summary.

use crate::layout::{Layout, plan_layout};
use crate::scenario::{EfficiencyScenarios, LoadCurrent, Summary, SummaryInput, summarize};
use ledcalc_common::config::ConfigError;
use ledcalc_common::consts::{
    DEFAULT_LED_CURRENT_A, DEMO_BATTERY_MAH, DEMO_BOOST_EFFICIENCY, DEMO_BOOST_OUTPUT_V,
    DEMO_LED_COUNT, DEMO_LED_FORWARD_V, DEMO_SUPPLY_V,
};
use ledcalc_common::error::CalcResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Boost converter between the battery and the LED branches.
///
/// # TOML Example
///
/// ```toml
/// [circuit.boost]
/// enabled = true
/// output_v = 18.0
/// max_efficiency = 0.9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoostSpec {
    pub enabled: bool,
    /// Converter output voltage feeding the branches.
    pub output_v: f64,
    /// Advertised maximum efficiency, in (0, 1].
    pub max_efficiency: f64,
}

impl Default for BoostSpec {
    fn default() -> Self {
        Self {
            enabled: false,
            output_v: DEMO_BOOST_OUTPUT_V,
            max_efficiency: DEMO_BOOST_EFFICIENCY,
        }
    }
}

/// Parameters of one LED circuit.
///
/// Fields missing from a configuration file keep their demo circuit value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircuitSpec {
    /// Battery or source voltage.
    pub supply_v: f64,
    /// Rated LED forward voltage.
    pub led_forward_v: f64,
    pub led_count: u32,
    /// Rated LED current in amps.
    pub led_current_a: f64,
    pub boost: BoostSpec,
    /// Battery capacity in mAh.
    pub battery_mah: u32,
    /// Measured load in milliamps, replaces the computed branch current.
    pub load_ma_override: Option<f64>,
}

impl Default for CircuitSpec {
    /// The built-in demo circuit.
    fn default() -> Self {
        Self {
            supply_v: DEMO_SUPPLY_V,
            led_forward_v: DEMO_LED_FORWARD_V,
            led_count: DEMO_LED_COUNT,
            led_current_a: DEFAULT_LED_CURRENT_A,
            boost: BoostSpec::default(),
            battery_mah: DEMO_BATTERY_MAH,
            load_ma_override: None,
        }
    }
}

impl CircuitSpec {
    /// Voltage seen by the LED branches.
    pub fn branch_supply_v(&self) -> f64 {
        if self.boost.enabled {
            self.boost.output_v
        } else {
            self.supply_v
        }
    }

    /// Validate static parameters.
    ///
    /// # Validation Rules
    /// 1. Voltages and LED current are positive
    /// 2. `led_count` > 0 and `battery_mah` > 0
    /// 3. Boost efficiency in (0, 1] and output voltage above the supply
    ///    when the converter is enabled
    /// 4. Milliamp override, if present, is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("supply_v", self.supply_v),
            ("led_forward_v", self.led_forward_v),
            ("led_current_a", self.led_current_a),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be greater than 0 (got {value})"
                )));
            }
        }

        if self.led_count == 0 {
            return Err(ConfigError::ValidationError(
                "led_count must be greater than 0".to_string(),
            ));
        }
        if self.battery_mah == 0 {
            return Err(ConfigError::ValidationError(
                "battery_mah must be greater than 0".to_string(),
            ));
        }

        if self.boost.enabled {
            let eff = self.boost.max_efficiency;
            if !(eff.is_finite() && eff > 0.0 && eff <= 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "boost.max_efficiency must be in (0, 1] (got {eff})"
                )));
            }
            if !(self.boost.output_v.is_finite() && self.boost.output_v > self.supply_v) {
                return Err(ConfigError::ValidationError(format!(
                    "boost.output_v ({}) must exceed supply_v ({})",
                    self.boost.output_v, self.supply_v
                )));
            }
        }

        if let Some(ma) = self.load_ma_override {
            if !(ma.is_finite() && ma > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "load_ma_override must be greater than 0 (got {ma})"
                )));
            }
        }
        Ok(())
    }
}

/// Layout and run time summary of one circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitReport {
    pub layout: Layout,
    pub summary: Summary,
}

impl fmt::Display for CircuitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.layout)?;
        write!(f, "{}", self.summary)
    }
}

/// Plan the branches of `spec` and summarize its battery run time.
///
/// The branches run from the boost output when the converter is enabled;
/// the summary always draws from the source voltage.
pub fn calculate(spec: &CircuitSpec, scenarios: &EfficiencyScenarios) -> CalcResult<CircuitReport> {
    let layout = plan_layout(
        spec.branch_supply_v(),
        spec.led_forward_v,
        spec.led_count,
        spec.led_current_a,
    )?;

    let load = LoadCurrent {
        amps: layout.total_current_a,
        milliamps: spec.load_ma_override.unwrap_or(0.0),
    };
    let input = SummaryInput {
        supply_v: spec.supply_v,
        boost_out_v: spec.boost.output_v,
        boost_max_efficiency: spec.boost.max_efficiency,
        battery_mah: spec.battery_mah,
        load,
        boosted: spec.boost.enabled,
    };
    let summary = summarize(&input, scenarios)?;

    info!(
        branches = layout.branches.len(),
        boosted = summary.boosted,
        rows = summary.rows.len(),
        "circuit calculated"
    );
    Ok(CircuitReport { layout, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RunTime;

    #[test]
    fn demo_circuit() {
        let report = calculate(&CircuitSpec::default(), &EfficiencyScenarios::default()).unwrap();
        assert_eq!(report.layout.max_per_branch, 6);
        assert_eq!(report.layout.full_branches, 2);
        assert_eq!(report.layout.remainder, 3);
        assert!(!report.summary.boosted);
        assert_eq!(report.summary.rows.len(), 1);
        assert_eq!(report.summary.rows[0].current_ma, 60);
        assert_eq!(report.summary.rows[0].runtime, RunTime { hours: 38, minutes: 20 });
    }

    #[test]
    fn boosted_branches_use_converter_output() {
        let spec = CircuitSpec {
            supply_v: 9.0,
            led_forward_v: 3.0,
            led_count: 8,
            boost: BoostSpec {
                enabled: true,
                output_v: 16.0,
                max_efficiency: 0.9,
            },
            ..CircuitSpec::default()
        };
        assert_eq!(spec.branch_supply_v(), 16.0);

        let report = calculate(&spec, &EfficiencyScenarios::default()).unwrap();
        assert_eq!(report.layout.supply_v, 16.0);
        assert_eq!(report.layout.branches.len(), 2);
        let ma: Vec<_> = report.summary.rows.iter().map(|r| r.current_ma).collect();
        assert_eq!(ma, vec![80, 90, 140]);
    }

    #[test]
    fn milliamp_override_replaces_branch_current() {
        let spec = CircuitSpec {
            load_ma_override: Some(20.0),
            ..CircuitSpec::default()
        };
        let report = calculate(&spec, &EfficiencyScenarios::default()).unwrap();
        assert!(report.summary.load_ma_override);
        assert_eq!(report.summary.rows[0].runtime, RunTime { hours: 115, minutes: 0 });
    }

    #[test]
    fn validation() {
        assert!(CircuitSpec::default().validate().is_ok());

        let bad = CircuitSpec {
            led_count: 0,
            ..CircuitSpec::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::ValidationError(_))));

        let bad = CircuitSpec {
            boost: BoostSpec {
                enabled: true,
                output_v: 18.0,
                max_efficiency: 1.5,
            },
            ..CircuitSpec::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::ValidationError(_))));

        let bad = CircuitSpec {
            boost: BoostSpec {
                enabled: true,
                output_v: 5.0,
                max_efficiency: 0.9,
            },
            ..CircuitSpec::default()
        };
        assert!(bad.validate().is_err());

        let bad = CircuitSpec {
            supply_v: -1.0,
            ..CircuitSpec::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn report_is_diagram_then_summary() {
        let report = calculate(&CircuitSpec::default(), &EfficiencyScenarios::default()).unwrap();
        let text = report.to_string();
        let end = text.find("END OF CIRCUIT\n\nBATTERY RUN TIMES").unwrap();
        assert!(end > 0);
        assert!(text.ends_with("Total current draw: 60 mA / 0.06 Amps\n"));
    }
}
