//! # ledcalc
//!
//! Calculator for simple LED driver circuits: how many LEDs fit in series
//! per parallel branch, which standard resistor limits each branch, the
//! current drawn from the source (optionally through a boost converter) and
//! the resulting battery run time.
//!
//! # Example
//!
//! ```rust
//! use ledcalc::circuit::{CircuitSpec, calculate};
//! use ledcalc::scenario::EfficiencyScenarios;
//!
//! let report = calculate(&CircuitSpec::default(), &EfficiencyScenarios::default()).unwrap();
//! assert_eq!(report.layout.led_count(), 15);
//! println!("{report}");
//! ```

pub mod boost;
pub mod circuit;
pub mod config;
pub mod error;
pub mod layout;
pub mod resistor;
pub mod runtime;
pub mod scenario;

pub use boost::{BoostDraw, OutputVoltage, boost_draw};
pub use circuit::{BoostSpec, CircuitReport, CircuitSpec, calculate};
pub use config::LedcalcConfig;
pub use error::{LedcalcError, LedcalcResult};
pub use layout::{Branch, Layout, plan_layout};
pub use resistor::{next_standard_value, select_resistor};
pub use runtime::{RunTime, estimate_runtime};
pub use scenario::{EfficiencyScenarios, LoadCurrent, ScenarioRow, Summary, SummaryInput, summarize};
