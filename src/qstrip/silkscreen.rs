//! Silkscreen outline derivation.
//!
//! The silkscreen silhouette is the fabrication outline pushed outward
//! by the configured clearance. Only the two end outlines and the
//! inter-bank side segments are drawn; the stretches over the pads are
//! left open.
//!
//! The right end outline is the vertex-wise mirror of the left one, but
//! mirroring alone is wrong as soon as a differential bank drops pins:
//! the last real pad of the final bank is then closer to the centre
//! than the mirror of the first pad. The correction step overwrites the
//! x of the first and last right-outline points with the true edge of
//! the last pin. Only the standard gap rule (every third pair) is
//! handled here; other gap patterns are not supported.

use crate::config::Config;
use crate::geometry::{Circle, Line, Point, Polyline};
use crate::qstrip::banks::PinTable;
use crate::qstrip::{fabrication, SilkscreenLayer, Variant, SILK_LINE_WIDTH};

/// Builds the silkscreen layer geometry.
#[must_use]
pub fn compute(config: &Config, pin_table: &PinTable) -> SilkscreenLayer {
    let offset = config.layout.silkscreen_offset;
    let pad_w = config.signal_pads.width;
    let pad_h = config.signal_pads.height;
    let chamfer = fabrication::chamfer(config);

    let silk_h = fabrication::half_height(config) + offset;
    let silk_left = -fabrication::body_width(config) / 2.0 - offset;
    // Clearance from a pad centre to the silk line beside it.
    let edge = pad_w / 2.0 + offset;

    let pin1 = pin_table.pin1();
    let x_pin1 = pin1.x - edge;

    let (end_left, pin1_circle) = match config.layout.variant {
        Variant::Terminal => {
            // First point is the pin-1 indicator leg running up the
            // outside of pad 1; it has no mirror counterpart.
            let left = Polyline::new(vec![
                Point::new(x_pin1, pin1.y - pad_h / 2.0),
                Point::new(x_pin1, -silk_h),
                Point::new(silk_left, -silk_h),
                Point::new(silk_left, silk_h - chamfer),
                Point::new(silk_left + chamfer, silk_h),
                Point::new(x_pin1, silk_h),
            ]);
            (left, None)
        }
        Variant::Socket => {
            let left = Polyline::new(vec![
                Point::new(x_pin1, silk_h),
                Point::new(silk_left, silk_h),
                Point::new(silk_left, -silk_h),
                Point::new(x_pin1, -silk_h),
            ]);
            // Socket marks pin 1 with a small open circle past the pad
            // instead of a leg.
            let radius = config.signal_pads.pitch / 4.0;
            let circle = Circle::new(pin1.x, pin1.y + pad_h / 2.0 + offset + radius, radius);
            (left, Some(circle))
        }
    };

    // Mirror the left outline, skipping the indicator leg, then pin the
    // end x-coordinates to the last real pin of the last bank.
    let skip = match config.layout.variant {
        Variant::Terminal => 1,
        Variant::Socket => 0,
    };
    let mut right: Vec<Point> = end_left.points[skip..]
        .iter()
        .map(|p| p.mirrored_x())
        .collect();
    let end_x = pin_table.last_pin().x + edge;
    if let Some(first) = right.first_mut() {
        first.x = end_x;
    }
    if let Some(last) = right.last_mut() {
        last.x = end_x;
    }
    let end_right = Polyline::new(right);

    // Side segments between adjacent banks, top and bottom.
    let mut side_lines = Vec::new();
    for pair in pin_table.banks().windows(2) {
        let (Some(last), Some(first)) = (pair[0].last(), pair[1].first()) else {
            continue;
        };
        let x0 = last.x + edge;
        let x1 = first.x - edge;
        for y in [-silk_h, silk_h] {
            side_lines.push(Line::new(x0, y, x1, y));
        }
    }

    SilkscreenLayer {
        end_left,
        end_right,
        side_lines,
        pin1_circle,
        line_width: SILK_LINE_WIDTH,
    }
}
