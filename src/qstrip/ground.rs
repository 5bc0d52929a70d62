//! Ground plane pad placement.
//!
//! Each bank carries four ground pads on the board centreline,
//! symmetric about the bank midpoint: an outer pair and an inner pair.
//! The spacings are centre-to-centre, so each pad sits at half the
//! configured spacing from the midpoint.

use crate::config::Config;
use crate::geometry::{Pad, PadRole};
use crate::qstrip::banks::PinTable;
use crate::qstrip::PadNumbering;

/// Places the ground plane pads for every bank.
///
/// Emission order per bank is outer-left, inner-left, inner-right,
/// outer-right; `numbering` continues from the last signal pad.
#[must_use]
pub fn compute(config: &Config, pin_table: &PinTable, numbering: &mut PadNumbering) -> Vec<Pad> {
    let gnd = &config.ground_pads;
    let half_inner = gnd.spacing_inner / 2.0;
    let half_outer = gnd.spacing_outer / 2.0;

    let offsets = [-half_outer, -half_inner, half_inner, half_outer];
    let widths = [
        gnd.width_outer,
        gnd.width_inner,
        gnd.width_inner,
        gnd.width_outer,
    ];

    let mut pads = Vec::with_capacity(pin_table.bank_count() as usize * offsets.len());
    for b in 0..pin_table.bank_count() {
        let mid = pin_table.bank_mid(b);
        for (offset, width) in offsets.iter().zip(widths) {
            pads.push(Pad::rectangular(
                numbering.take(),
                mid + offset,
                0.0,
                width,
                gnd.height,
                PadRole::Ground,
            ));
        }
    }
    pads
}
