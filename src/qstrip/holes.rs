//! Mounting hole placement.
//!
//! A hole family (alignment holes or locking pins) is always emitted as
//! a mirrored pair about x = 0. The x offset is measured inward from
//! the pin-1 column, and the y offset flips sign with the variant, the
//! same convention the signal pads use.
//!
//! Plating follows the ring-versus-drill comparison in
//! [`Hole::from_drill_and_ring`]: alignment holes carry no ring and
//! come out non-plated, locking pins usually carry a ring wider than
//! the drill and come out plated.

use crate::config::HoleFamilyConfig;
use crate::geometry::Hole;
use crate::qstrip::Variant;

/// Places one hole family.
///
/// Returns an empty list when the family is disabled; otherwise exactly
/// two holes, left first.
#[must_use]
pub fn compute(family: &HoleFamilyConfig, pin1_x: f64, variant: Variant) -> Vec<Hole> {
    if !family.enabled {
        return Vec::new();
    }

    let y = variant.y_sign() * family.y_offset;
    let x = pin1_x - family.x_offset;

    [x, -x]
        .into_iter()
        .map(|x| Hole::from_drill_and_ring(x, y, family.drill, family.pad_diameter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> HoleFamilyConfig {
        HoleFamilyConfig::alignment_defaults()
    }

    #[test]
    fn disabled_family_emits_nothing() {
        let mut cfg = family();
        cfg.enabled = false;
        assert!(compute(&cfg, -27.25, Variant::Terminal).is_empty());
    }

    #[test]
    fn holes_are_a_mirrored_pair() {
        let holes = compute(&family(), -27.25, Variant::Terminal);
        assert_eq!(holes.len(), 2);
        assert!((holes[0].x + holes[1].x).abs() < 1e-9);
        assert!((holes[0].y - holes[1].y).abs() < 1e-9);
    }

    #[test]
    fn x_offset_is_measured_from_pin1() {
        let cfg = family();
        let holes = compute(&cfg, -27.25, Variant::Terminal);
        assert!((holes[0].x - (-27.25 - cfg.x_offset)).abs() < 1e-9);
    }

    #[test]
    fn y_sign_follows_variant() {
        let cfg = family();
        let terminal = compute(&cfg, -27.25, Variant::Terminal);
        let socket = compute(&cfg, -27.25, Variant::Socket);
        assert!((terminal[0].y + cfg.y_offset).abs() < 1e-9);
        assert!((socket[0].y - cfg.y_offset).abs() < 1e-9);
    }

    #[test]
    fn alignment_holes_are_non_plated() {
        let holes = compute(&family(), -27.25, Variant::Terminal);
        assert!(holes.iter().all(|h| !h.plated));
        assert!(holes.iter().all(|h| (h.diameter - h.drill).abs() < 1e-9));
    }

    #[test]
    fn locking_pins_are_plated() {
        let mut cfg = HoleFamilyConfig::locking_defaults();
        cfg.enabled = true;
        let holes = compute(&cfg, -27.25, Variant::Terminal);
        assert_eq!(holes.len(), 2);
        assert!(holes.iter().all(|h| h.plated));
        assert!((holes[0].diameter - 2.05).abs() < 1e-9);
        assert!((holes[0].drill - 1.45).abs() < 1e-9);
    }

    #[test]
    fn ring_equal_to_drill_is_non_plated() {
        let mut cfg = family();
        cfg.pad_diameter = Some(cfg.drill);
        let holes = compute(&cfg, -27.25, Variant::Terminal);
        assert!(holes.iter().all(|h| !h.plated));
    }
}
