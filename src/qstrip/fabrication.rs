//! Fabrication (assembly) layer outline.
//!
//! The body outline is variant specific. A Terminal body is an open
//! left-half polyline with a chamfered bottom-left corner, mirrored
//! about x = 0 by the drawing collaborator. A Socket body is a closed
//! rectangle with a separate two-point chamfer cut at the top-left
//! corner, mirrored the same way. The chamfer is a fixed quarter of the
//! body height, cosmetic only.

use crate::config::Config;
use crate::error::GeometryError;
use crate::geometry::{ArrowDirection, Marker, Point, Polyline, Rect};
use crate::qstrip::banks::PinTable;
use crate::qstrip::{FabricationLayer, Variant, FAB_LINE_WIDTH};

/// Extra body width of a Socket over a Terminal (mm).
///
/// Sockets are 1.27 mm wider in all relevant Q-Strip datasheets.
pub const SOCKET_WIDTH_EXTRA: f64 = 1.27;

/// Body outline width for this parameter set.
#[must_use]
pub fn body_width(config: &Config) -> f64 {
    let width = f64::from(config.banks.banks) * config.banks.spacing;
    match config.layout.variant {
        Variant::Terminal => width,
        Variant::Socket => width + SOCKET_WIDTH_EXTRA,
    }
}

/// Half the body outline height.
#[must_use]
pub fn half_height(config: &Config) -> f64 {
    config.layout.connector_height / 2.0
}

/// Corner chamfer length: a quarter of the body height.
#[must_use]
pub fn chamfer(config: &Config) -> f64 {
    config.layout.connector_height / 4.0
}

/// Builds the fabrication layer geometry.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the outline would be degenerate or
/// the chamfer would self-intersect; nothing is clamped.
pub fn compute(config: &Config, pin_table: &PinTable) -> Result<FabricationLayer, GeometryError> {
    let width = body_width(config);
    let half_h = half_height(config);
    let chamfer = chamfer(config);
    let pitch = config.signal_pads.pitch;
    let left = -width / 2.0;

    if width <= 0.0 || half_h <= 0.0 {
        return Err(GeometryError::DegenerateOutline {
            width,
            height: 2.0 * half_h,
        });
    }
    if chamfer >= half_h {
        return Err(GeometryError::ChamferExceedsBody {
            chamfer,
            half_height: half_h,
        });
    }

    let pin1_x = pin_table.pin1().x;
    let (body, outlines, pin1_marker) = match config.layout.variant {
        Variant::Terminal => {
            // Left half plus centre points; the mirror completes it.
            let outline = Polyline::with_mirror(vec![
                Point::new(0.0, -half_h),
                Point::new(left, -half_h),
                Point::new(left, half_h - chamfer),
                Point::new(left + chamfer, half_h),
                Point::new(0.0, half_h),
            ]);
            let marker = Marker::new(
                pin1_x,
                -half_h + pitch / 2.0,
                ArrowDirection::South,
                pitch,
            );
            (None, vec![outline], marker)
        }
        Variant::Socket => {
            let body = Rect::centred(width, 2.0 * half_h);
            let corner = Polyline::with_mirror(vec![
                Point::new(left, -half_h + chamfer),
                Point::new(left + chamfer, -half_h),
            ]);
            let marker = Marker::new(
                pin1_x,
                half_h - pitch / 2.0,
                ArrowDirection::North,
                pitch,
            );
            (Some(body), vec![corner], marker)
        }
    };

    // Bank cutouts span the outer ground pads; good enough for a
    // cosmetic assembly drawing.
    let cutout_width = config.ground_pads.spacing_outer;
    let cutouts = (0..pin_table.bank_count())
        .map(|b| {
            Rect::centred_at(
                pin_table.bank_mid(b),
                0.0,
                cutout_width,
                config.banks.height,
            )
        })
        .collect();

    Ok(FabricationLayer {
        body,
        outlines,
        cutouts,
        pin1_marker,
        line_width: FAB_LINE_WIDTH,
    })
}
