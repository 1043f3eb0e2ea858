//! Prelude module for common re-exports.
//!
//! ```rust
//! use ledcalc_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::error::{CalcError, CalcResult};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{DEFAULT_EFFICIENCIES, RESISTOR_CATALOG, SAFETY_MARGIN};
