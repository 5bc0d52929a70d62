//! Shared geometry primitives.
//!
//! All coordinates are in millimetres with the origin at the footprint
//! centre. The y axis follows the board convention (positive y points
//! towards the bottom of the board as drawn), which is why the
//! Terminal/Socket variants flip signs rather than rotating anything.
//!
//! Every type here is a plain value: the builders construct them fresh
//! for each build and hand them to the drawing collaborator, nothing is
//! shared or mutated afterwards.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point reflected about the y axis (x negated).
    #[must_use]
    pub fn mirrored_x(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }
}

/// A line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start X (mm).
    pub x1: f64,
    /// Start Y (mm).
    pub y1: f64,
    /// End X (mm).
    pub x2: f64,
    /// End Y (mm).
    pub y2: f64,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X (mm).
    pub min_x: f64,
    /// Minimum Y (mm).
    pub min_y: f64,
    /// Maximum X (mm).
    pub max_x: f64,
    /// Maximum Y (mm).
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle centred at origin.
    #[must_use]
    pub fn centred(width: f64, height: f64) -> Self {
        Self::centred_at(0.0, 0.0, width, height)
    }

    /// Creates a rectangle centred at `(cx, cy)`.
    #[must_use]
    pub fn centred_at(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min_x: cx - half_w,
            min_y: cy - half_h,
            max_x: cx + half_w,
            max_y: cy + half_h,
        }
    }

    /// Returns the rectangle width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the rectangle height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// An open polyline.
///
/// When `mirrored_x` is set, the consumer must also draw the polyline
/// reflected about x = 0: the builders emit only the left half of a
/// symmetric outline plus its centre points, and declare the mirror
/// here instead of duplicating points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Draw the reflection about x = 0 as well.
    pub mirrored_x: bool,
}

impl Polyline {
    /// Creates a polyline from vertices.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            mirrored_x: false,
        }
    }

    /// Creates a polyline whose reflection about x = 0 is drawn too.
    #[must_use]
    pub const fn with_mirror(points: Vec<Point>) -> Self {
        Self {
            points,
            mirrored_x: true,
        }
    }
}

/// A circle outline (used for the Socket pin-1 indicator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Centre X (mm).
    pub x: f64,
    /// Centre Y (mm).
    pub y: f64,
    /// Radius (mm).
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }
}

/// Cardinal direction of a pin-1 marker arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowDirection {
    /// Arrow points towards negative y.
    North,
    /// Arrow points towards positive y.
    South,
}

/// An open arrow marker on a drawing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Tip X (mm).
    pub x: f64,
    /// Tip Y (mm).
    pub y: f64,
    /// Direction the arrow points.
    pub direction: ArrowDirection,
    /// Arrow size (mm).
    pub size: f64,
}

impl Marker {
    /// Creates a new arrow marker.
    #[must_use]
    pub const fn new(x: f64, y: f64, direction: ArrowDirection, size: f64) -> Self {
        Self {
            x,
            y,
            direction,
            size,
        }
    }
}

/// A rectangular surface-mount pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad designator (1, 2, ...).
    pub number: u32,

    /// Pad centre X coordinate (mm).
    pub x: f64,

    /// Pad centre Y coordinate (mm).
    pub y: f64,

    /// Pad width in X direction (mm).
    pub width: f64,

    /// Pad height in Y direction (mm).
    pub height: f64,

    /// Role of the pad in the connector.
    pub role: PadRole,
}

impl Pad {
    /// Creates a new rectangular SMD pad.
    #[must_use]
    pub const fn rectangular(number: u32, x: f64, y: f64, width: f64, height: f64, role: PadRole) -> Self {
        Self {
            number,
            x,
            y,
            width,
            height,
            role,
        }
    }
}

/// Electrical role of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadRole {
    /// Signal pin pad.
    Signal,
    /// Ground plane pad.
    Ground,
}

/// A drilled hole, plated or not.
///
/// A hole is plated only when its annular ring is wider than the drill;
/// otherwise the copper would be a sliver and the hole is treated as a
/// purely mechanical non-plated hole with outer diameter equal to the
/// drill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Centre X coordinate (mm).
    pub x: f64,

    /// Centre Y coordinate (mm).
    pub y: f64,

    /// Drill diameter (mm).
    pub drill: f64,

    /// Outer (pad) diameter (mm). Equals `drill` for non-plated holes.
    pub diameter: f64,

    /// Whether the barrel is copper plated.
    pub plated: bool,
}

impl Hole {
    /// Creates a hole, deciding plating from the ring/drill comparison.
    ///
    /// `ring` of `None` (or any value not larger than the drill) yields
    /// a non-plated mechanical hole.
    #[must_use]
    pub fn from_drill_and_ring(x: f64, y: f64, drill: f64, ring: Option<f64>) -> Self {
        match ring {
            Some(ring) if ring > drill => Self {
                x,
                y,
                drill,
                diameter: ring,
                plated: true,
            },
            _ => Self {
                x,
                y,
                drill,
                diameter: drill,
                plated: false,
            },
        }
    }
}

/// Snaps a value to the nearest multiple of `grid`.
///
/// Used to keep courtyard and text geometry on a fabrication grid.
#[must_use]
pub fn put_on_grid(value: f64, grid: f64) -> f64 {
    (value / grid).round() * grid
}
