//! Config file tests: loading `ledcalc.toml` from disk, partial tables
//! falling back to the demo circuit, validation failures.

use ledcalc::LedcalcConfig;
use ledcalc::circuit::calculate;
use ledcalc_common::config::{ConfigError, LogLevel};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `content` as ledcalc.toml in the given directory and return its path.
fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("ledcalc.toml");
    fs::write(&path, content).unwrap();
    path
}

// ─── Tests ──────────────────────────────────────────────────────────

/// Test: a complete boosted circuit loads and calculates.
#[test]
fn load_boosted_circuit() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        r#"
[shared]
log_level = "debug"
service_name = "bench-psu"

[circuit]
supply_v = 9.0
led_forward_v = 3.0
led_count = 8
led_current_a = 0.02
battery_mah = 2300

[circuit.boost]
enabled = true
output_v = 16.0
max_efficiency = 0.9

[scenarios]
efficiencies = [0.94, 0.82, 0.5]
"#,
    );

    let config = LedcalcConfig::load_validated(&path).expect("should load successfully");
    assert_eq!(config.shared.log_level, LogLevel::Debug);
    assert_eq!(config.shared.service_name, "bench-psu");
    assert!(config.circuit.boost.enabled);

    let report = calculate(&config.circuit, &config.scenarios).unwrap();
    assert_eq!(report.summary.rows.len(), 3);
    assert_eq!(report.summary.rows[0].efficiency, Some(0.9));
}

/// Test: fields missing from [circuit] keep the demo values.
#[test]
fn partial_circuit_table() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        r#"
[circuit]
led_count = 12
"#,
    );

    let config = LedcalcConfig::load_validated(&path).unwrap();
    assert_eq!(config.circuit.led_count, 12);
    assert_eq!(config.circuit.supply_v, 9.0);
    assert_eq!(config.circuit.battery_mah, 2300);

    let report = calculate(&config.circuit, &config.scenarios).unwrap();
    assert_eq!(report.layout.full_branches, 2);
    assert_eq!(report.layout.remainder, 0);
}

/// Test: missing file maps to FileNotFound.
#[test]
fn missing_file() {
    let tmp = TempDir::new().unwrap();
    let result = LedcalcConfig::load_validated(&tmp.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

/// Test: unknown fields inside [circuit] are a parse error.
#[test]
fn unknown_field_rejected() {
    let tmp = TempDir::new().unwrap();
    // A typo must not fall back to the demo circuit's LED count.
    let path = write_config(tmp.path(), "[circuit]\nled_cuont = 40\nsupply_volts = 24.0\n");
    assert!(matches!(
        LedcalcConfig::load_validated(&path),
        Err(ConfigError::ParseError(msg)) if msg.contains("led_cuont")
    ));

    let path = write_config(tmp.path(), "[circuit.boost]\nenable = true\n");
    assert!(matches!(
        LedcalcConfig::load_validated(&path),
        Err(ConfigError::ParseError(_))
    ));

    let path = write_config(tmp.path(), "[battery]\nmah = 2300\n");
    assert!(matches!(
        LedcalcConfig::load_validated(&path),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test: semantic validation runs after parsing.
#[test]
fn validation_failures() {
    let tmp = TempDir::new().unwrap();

    let path = write_config(tmp.path(), "[circuit]\nled_forward_v = 0.0\n");
    assert!(matches!(
        LedcalcConfig::load_validated(&path),
        Err(ConfigError::ValidationError(msg)) if msg.contains("led_forward_v")
    ));

    let path = write_config(
        tmp.path(),
        "[circuit.boost]\nenabled = true\noutput_v = 18.0\nmax_efficiency = 0.0\n",
    );
    assert!(matches!(
        LedcalcConfig::load_validated(&path),
        Err(ConfigError::ValidationError(msg)) if msg.contains("max_efficiency")
    ));

    let path = write_config(tmp.path(), "[shared]\nservice_name = \"\"\n");
    assert!(LedcalcConfig::load_validated(&path).is_err());
}

/// Test: the shipped sample configuration is valid.
#[test]
fn shipped_sample_config() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/ledcalc.toml");
    let config = LedcalcConfig::load_validated(&path).expect("sample config should load");
    assert_eq!(config.circuit.led_count, 8);
    assert!(config.circuit.load_ma_override.is_none());

    let report = calculate(&config.circuit, &config.scenarios).unwrap();
    let ma: Vec<_> = report.summary.rows.iter().map(|r| r.current_ma).collect();
    assert_eq!(ma, vec![80, 90, 140]);
}
