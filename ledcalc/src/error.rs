//! Error types for the ledcalc application.

use ledcalc_common::config::ConfigError;
use ledcalc_common::error::CalcError;
use thiserror::Error;

/// Errors that can abort a ledcalc run.
#[derive(Error, Debug)]
pub enum LedcalcError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {source}")]
    Config {
        /// Source config error
        #[from]
        source: ConfigError,
    },

    /// Calculation precondition violated
    #[error("Calculation error: {source}")]
    Calc {
        /// Source calculation error
        #[from]
        source: CalcError,
    },

    /// JSON report serialization error
    #[error("JSON error: {source}")]
    Json {
        /// Source JSON error
        #[from]
        source: serde_json::Error,
    },
}

/// Result type for ledcalc application operations
pub type LedcalcResult<T> = Result<T, LedcalcError>;
