//! ledcalc application configuration (`ledcalc.toml`).
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! log_level = "info"
//! service_name = "ledcalc"
//!
//! [circuit]
//! supply_v = 9.0
//! led_forward_v = 3.0
//! led_count = 8
//! led_current_a = 0.02
//! battery_mah = 2300
//!
//! [circuit.boost]
//! enabled = true
//! output_v = 16.0
//! max_efficiency = 0.9
//!
//! [scenarios]
//! efficiencies = [0.94, 0.82, 0.5]
//! ```

use crate::circuit::CircuitSpec;
use crate::scenario::EfficiencyScenarios;
use ledcalc_common::config::{ConfigError, ConfigLoader, SharedConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root of `ledcalc.toml`. Every table is optional and falls back to the
/// built-in demo circuit and default efficiency spread.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedcalcConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub circuit: CircuitSpec,
    #[serde(default)]
    pub scenarios: EfficiencyScenarios,
}

impl LedcalcConfig {
    /// Load and validate a configuration file.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.circuit.validate()?;

        if self.scenarios.is_empty() {
            return Err(ConfigError::ValidationError(
                "scenarios.efficiencies cannot be empty".to_string(),
            ));
        }
        // Re-run the constructor checks, deserialization bypasses them.
        EfficiencyScenarios::new(self.scenarios.as_slice().to_vec())
            .map_err(|e| ConfigError::ValidationError(format!("scenarios: {e}")))?;
        Ok(())
    }
}
