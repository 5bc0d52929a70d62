//! Parameter file loading tests.
//!
//! Exercises the JSON parameter surface the CLI exposes: partial files
//! on top of defaults, unknown fields, and validation failures.

use std::fs;

use qstrip_footprint::config::{self, Config};
use qstrip_footprint::error::Error;
use qstrip_footprint::qstrip::{self, Variant};

fn write_params(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("params.json");
    fs::write(&path, contents).expect("write params");
    path
}

#[test]
fn empty_object_yields_the_default_part() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_params(&dir, "{}");

    let cfg = config::load_params(Some(path.as_path())).expect("load");
    assert_eq!(cfg, Config::default());
}

#[test]
fn partial_file_overrides_only_named_groups() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_params(
        &dir,
        r#"{
            "layout": { "variant": "Socket" },
            "banks": { "banks": 2, "pins_per_bank": 40, "differential": 1 }
        }"#,
    );

    let cfg = config::load_params(Some(path.as_path())).expect("load");
    assert_eq!(cfg.layout.variant, Variant::Socket);
    assert_eq!(cfg.banks.banks, 2);
    assert_eq!(cfg.banks.differential, 1);
    // Untouched groups keep their defaults.
    assert!((cfg.signal_pads.pitch - 0.5).abs() < 1e-9);
    assert!(cfg.alignment_holes.enabled);

    let footprint = qstrip::build(&cfg).expect("build");
    assert_eq!(footprint.name, "QStrip_Socket_2x40_P0.50mm_Diff1");
}

#[test]
fn unknown_fields_fail_parsing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_params(&dir, r#"{ "bankz": {} }"#);

    let result = config::load_params(Some(path.as_path()));
    assert!(matches!(result, Err(Error::ParseFile { .. })));
}

#[test]
fn invalid_values_fail_validation_with_field_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_params(
        &dir,
        r#"{ "signal_pads": { "pitch": 0.0 }, "banks": { "pins_per_bank": 7 } }"#,
    );

    match config::load_params(Some(path.as_path())) {
        Err(Error::Config(errors)) => {
            assert_eq!(errors.len(), 2);
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            assert!(joined.contains("signal_pads.pitch"));
            assert!(joined.contains("pins_per_bank"));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn locking_pins_can_be_enabled_from_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_params(
        &dir,
        r#"{
            "locking_pins": {
                "enabled": true,
                "drill": 1.45,
                "pad_diameter": 2.05,
                "x_offset": 3.71,
                "y_offset": 0.0
            }
        }"#,
    );

    let cfg = config::load_params(Some(path.as_path())).expect("load");
    let footprint = qstrip::build(&cfg).expect("build");
    // Alignment pair plus locking pin pair.
    assert_eq!(footprint.holes.len(), 4);
    assert_eq!(footprint.holes.iter().filter(|h| h.plated).count(), 2);
}
