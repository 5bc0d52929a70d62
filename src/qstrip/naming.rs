//! Footprint name generation.
//!
//! Names follow the KiCad connector library convention:
//! `QStrip_{Variant}_{banks}x{pins}_P{pitch}mm`, with a `_Diff{n}`
//! suffix when leading banks are laid out for differential pairs.
//!
//! Examples:
//! - `QStrip_Terminal_3x60_P0.50mm`
//! - `QStrip_Socket_2x40_P0.50mm_Diff1`

use crate::qstrip::Variant;

/// Generates the footprint name for a parameter set.
#[must_use]
pub fn footprint_name(
    variant: Variant,
    banks: u32,
    pins_per_bank: u32,
    pitch: f64,
    differential: u32,
) -> String {
    let mut name = format!(
        "QStrip_{}_{banks}x{pins_per_bank}_P{pitch:.2}mm",
        variant.name()
    );
    if differential > 0 {
        name.push_str(&format!("_Diff{}", differential.min(banks)));
    }
    name
}
