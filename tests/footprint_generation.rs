//! End-to-end footprint generation tests.
//!
//! These exercise the full build pipeline against the properties the
//! connector family guarantees: pad counts, mirror symmetries, and
//! deterministic output.

use qstrip_footprint::config::Config;
use qstrip_footprint::geometry::PadRole;
use qstrip_footprint::qstrip::{self, Variant};

/// Helper to compare floats with tolerance.
fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn config(banks: u32, pins: u32, differential: u32) -> Config {
    let mut cfg = Config::default();
    cfg.banks.banks = banks;
    cfg.banks.pins_per_bank = pins;
    cfg.banks.differential = differential;
    cfg
}

#[test]
fn default_part_has_expected_pad_counts() {
    let footprint = qstrip::build(&Config::default()).expect("defaults build");

    let signal = footprint
        .pads
        .iter()
        .filter(|p| p.role == PadRole::Signal)
        .count();
    let ground = footprint
        .pads
        .iter()
        .filter(|p| p.role == PadRole::Ground)
        .count();

    assert_eq!(signal, 180); // 3 banks x 60 pins
    assert_eq!(ground, 12); // 3 banks x 4 ground pads
    assert_eq!(footprint.holes.len(), 2); // alignment pair
    assert_eq!(footprint.name, "QStrip_Terminal_3x60_P0.50mm");
}

#[test]
fn differential_bank_removes_gap_pins() {
    // 180 - 2 * 1 * floor(60/6) = 160
    let footprint = qstrip::build(&config(3, 60, 1)).expect("valid");
    let signal = footprint
        .pads
        .iter()
        .filter(|p| p.role == PadRole::Signal)
        .count();
    assert_eq!(signal, 160);
}

#[test]
fn pin_1_lands_at_reference_position() {
    let footprint = qstrip::build(&Config::default()).expect("valid");
    let pin1 = &footprint.pads[0];
    assert_eq!(pin1.number, 1);
    assert!(approx_eq(pin1.x, -27.25, 1e-9));
    assert!(approx_eq(pin1.y, -3.086, 1e-9)); // Terminal: -y offset
}

#[test]
fn socket_mirrors_pin_rows() {
    let mut cfg = Config::default();
    cfg.layout.variant = Variant::Socket;
    let socket = qstrip::build(&cfg).expect("valid");
    let terminal = qstrip::build(&Config::default()).expect("valid");

    for (s, t) in socket.pads.iter().zip(&terminal.pads) {
        assert!(approx_eq(s.x, t.x, 1e-9));
        assert!(approx_eq(s.y, -t.y, 1e-9));
    }
}

#[test]
fn signal_pads_alternate_rows() {
    let footprint = qstrip::build(&Config::default()).expect("valid");
    let signal: Vec<_> = footprint
        .pads
        .iter()
        .filter(|p| p.role == PadRole::Signal)
        .collect();
    for pair in signal.chunks(2) {
        assert!(approx_eq(pair[0].y, -pair[1].y, 1e-9));
    }
}

#[test]
fn holes_come_in_mirrored_pairs() {
    let mut cfg = Config::default();
    cfg.locking_pins.enabled = true;
    let footprint = qstrip::build(&cfg).expect("valid");

    assert_eq!(footprint.holes.len() % 2, 0);
    for pair in footprint.holes.chunks(2) {
        assert!(approx_eq(pair[0].x, -pair[1].x, 1e-9));
        assert!(approx_eq(pair[0].y, pair[1].y, 1e-9));
    }

    // Alignment holes bare, locking pins plated.
    let plated = footprint.holes.iter().filter(|h| h.plated).count();
    assert_eq!(plated, 2);
}

#[test]
fn silkscreen_correction_tracks_last_pin() {
    let cfg = config(3, 60, 3);
    let footprint = qstrip::build(&cfg).expect("valid");

    let signal_last = footprint
        .pads
        .iter()
        .filter(|p| p.role == PadRole::Signal)
        .last()
        .expect("signal pads");
    let edge = cfg.signal_pads.width / 2.0 + cfg.layout.silkscreen_offset;

    let right = &footprint.silkscreen.end_right.points;
    assert!(approx_eq(right[0].x, signal_last.x + edge, 1e-9));
    assert!(approx_eq(
        right[right.len() - 1].x,
        signal_last.x + edge,
        1e-9
    ));
}

#[test]
fn geometry_is_deterministic() {
    let cfg = config(4, 26, 2);
    let a = qstrip::build(&cfg).expect("valid");
    let b = qstrip::build(&cfg).expect("valid");
    assert_eq!(a, b);

    // And stable through serialisation.
    let ja = serde_json::to_string(&a).expect("serialise");
    let jb = serde_json::to_string(&b).expect("serialise");
    assert_eq!(ja, jb);
}

#[test]
fn courtyard_encloses_every_pad() {
    let footprint = qstrip::build(&Config::default()).expect("valid");
    let bounds = footprint.courtyard.bounds;
    for pad in &footprint.pads {
        assert!(pad.x - pad.width / 2.0 >= bounds.min_x - 1e-9);
        assert!(pad.x + pad.width / 2.0 <= bounds.max_x + 1e-9);
        assert!(pad.y - pad.height / 2.0 >= bounds.min_y - 1e-9);
        assert!(pad.y + pad.height / 2.0 <= bounds.max_y + 1e-9);
    }
}

#[test]
fn invalid_parameters_are_rejected_before_geometry() {
    let mut cfg = Config::default();
    cfg.banks.pins_per_bank = 59;
    cfg.ground_pads.spacing_inner = 20.0;
    let err = qstrip::build(&cfg).expect_err("must reject");
    let message = err.to_string();
    assert!(message.contains("pins_per_bank"));
    assert!(message.contains("spacing_inner"));
}

#[test]
fn two_bank_differential_socket_builds() {
    // A smaller part from the same family: QTS-016 style.
    let mut cfg = config(2, 16, 2);
    cfg.layout.variant = Variant::Socket;
    cfg.banks.spacing = 8.0;
    cfg.ground_pads.spacing_inner = 3.0;
    cfg.ground_pads.spacing_outer = 6.5;
    let footprint = qstrip::build(&cfg).expect("valid");

    // 16 pins per bank lose 2 * floor(16/6) = 4 each.
    let signal = footprint
        .pads
        .iter()
        .filter(|p| p.role == PadRole::Signal)
        .count();
    assert_eq!(signal, 2 * (16 - 4));
    assert_eq!(footprint.name, "QStrip_Socket_2x16_P0.50mm_Diff2");
    assert!(footprint.silkscreen.pin1_circle.is_some());
}
