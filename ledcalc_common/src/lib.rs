//! ledcalc Common Library
//!
//! This crate provides shared constants, configuration loading utilities
//! and the calculation error taxonomy for all ledcalc workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Resistor catalog, default efficiencies and the demo circuit
//! - [`config`] - Configuration loading traits and types
//! - [`error`] - Calculation error taxonomy
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use ledcalc_common::consts::RESISTOR_CATALOG;
//! use ledcalc_common::config::{ConfigLoader, SharedConfig};
//! ```

pub mod config;
pub mod consts;
pub mod error;
pub mod prelude;
