//! Calculation error taxonomy.
//!
//! Every calculation in the workspace is a one-shot deterministic
//! evaluation. A violated precondition aborts the whole calculation and
//! reports which input was out of bounds; nothing is retried.

use thiserror::Error;

/// Error types for circuit calculations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalcError {
    /// The inflated ideal resistance is above every catalog value.
    #[error("No standard resistor at or above {requested_ohms} Ω (catalog maximum is {max_ohms} Ω)")]
    OutOfRange { requested_ohms: f64, max_ohms: f64 },

    /// The source cannot drive the load voltage (LED string or boost output).
    #[error("Invalid voltage configuration: supply {supply_v} V cannot drive a {load_v} V load")]
    InvalidVoltageConfiguration { supply_v: f64, load_v: f64 },

    /// Converter efficiency outside (0, 1].
    #[error("Invalid converter efficiency: {0} (must be in (0, 1])")]
    InvalidEfficiency(f64),

    /// Non-positive or non-finite current.
    #[error("Invalid current draw: {0} (must be greater than 0)")]
    InvalidDraw(f64),
}

/// Result alias for calculation operations.
pub type CalcResult<T> = Result<T, CalcError>;
