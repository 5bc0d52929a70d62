//! Courtyard boundary and text anchor placement.
//!
//! Both are derived values, recomputed on every build: the courtyard
//! wraps the body width and the pad row extent with a fixed margin, and
//! the reference/value text sits just outside the pad rows. Everything
//! is snapped to a fabrication grid, the text to a coarser one so the
//! fields land on round positions.

use crate::config::Config;
use crate::geometry::{put_on_grid, Point, Rect};
use crate::qstrip::{fabrication, Courtyard, TextAnchors, COURTYARD_LINE_WIDTH};

/// Margin added around the snapped courtyard extents (mm).
const COURTYARD_MARGIN: f64 = 1.0;

/// Grid for the courtyard box (mm).
const COURTYARD_GRID: f64 = 0.05;

/// Grid for the text anchors (mm).
const TEXT_GRID: f64 = 0.5;

/// Computes the courtyard box and the text anchors.
#[must_use]
pub fn compute(config: &Config) -> (Courtyard, TextAnchors) {
    let pad_extent = config.signal_pads.y_offset + config.signal_pads.height / 2.0;

    let width = put_on_grid(fabrication::body_width(config), COURTYARD_GRID) + COURTYARD_MARGIN;
    let height = put_on_grid(2.0 * pad_extent, COURTYARD_GRID) + COURTYARD_MARGIN;

    let courtyard = Courtyard {
        bounds: Rect::centred(width, height),
        line_width: COURTYARD_LINE_WIDTH,
    };

    let text_y = put_on_grid(pad_extent + COURTYARD_MARGIN, TEXT_GRID);
    let text = TextAnchors {
        reference: Point::new(0.0, -text_y),
        value: Point::new(0.0, text_y),
    };

    (courtyard, text)
}
