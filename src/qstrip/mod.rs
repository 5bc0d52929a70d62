//! Parametric Q-Strip footprint layout engine.
//!
//! A Q-Strip connector is an array of pin *banks*: contiguous two-row
//! groups of signal pins at a fixed pitch, each with its own cluster of
//! ground plane pads, repeated at a fixed bank spacing. The engine
//! turns one [`Config`] into a complete [`Footprint`]: signal and
//! ground pads, mounting holes, and outline geometry for the
//! fabrication, silkscreen, and courtyard layers.
//!
//! The build is a pure function of the parameter set. Nothing is
//! cached or shared between builds, so batch generation of a part
//! family is trivially parallel.
//!
//! # Example
//!
//! ```
//! use qstrip_footprint::config::Config;
//! use qstrip_footprint::qstrip;
//!
//! let footprint = qstrip::build(&Config::default()).expect("defaults are valid");
//! // 3 banks x 60 pins + 3 x 4 ground pads
//! assert_eq!(footprint.pads.len(), 192);
//! ```

pub mod banks;
pub mod courtyard;
pub mod fabrication;
pub mod ground;
pub mod holes;
pub mod naming;
pub mod silkscreen;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::geometry::{Circle, Hole, Line, Marker, Pad, PadRole, Point, Polyline, Rect};

/// Fabrication layer line width (mm), per KLC F5.2.
pub const FAB_LINE_WIDTH: f64 = 0.10;

/// Silkscreen line width (mm), per KLC F5.1 / IPC-7351C.
pub const SILK_LINE_WIDTH: f64 = 0.12;

/// Courtyard line width (mm).
pub const COURTYARD_LINE_WIDTH: f64 = 0.05;

/// Connector body style.
///
/// The two styles are vertical mirrors of one another: the variant
/// decides the sign of every y offset and which edge carries the
/// chamfer and pin-1 marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Board-to-board terminal strip (plug).
    #[default]
    Terminal,
    /// Mating socket strip. Sockets are 1.27 mm wider than terminals
    /// across the Q-Strip datasheets.
    Socket,
}

impl Variant {
    /// Sign applied to y offsets for this variant.
    ///
    /// Pin 1 sits at `y_sign * y_offset`; hole y offsets follow the
    /// same convention.
    #[must_use]
    pub const fn y_sign(self) -> f64 {
        match self {
            Self::Terminal => -1.0,
            Self::Socket => 1.0,
        }
    }

    /// Parses a variant from a string.
    ///
    /// Accepts "Terminal" and "Socket", case-insensitive.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TERMINAL" => Some(Self::Terminal),
            "SOCKET" => Some(Self::Socket),
            _ => None,
        }
    }

    /// Returns the variant name used in footprint names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Socket => "Socket",
        }
    }
}

/// Sequential pad designator counter.
///
/// Signal pads and ground pads share one numbering; the counter is
/// passed explicitly to each placer rather than living in hidden
/// shared state.
#[derive(Debug)]
pub struct PadNumbering {
    next: u32,
}

impl PadNumbering {
    /// Starts numbering at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next designator and advances the counter.
    pub fn take(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for PadNumbering {
    fn default() -> Self {
        Self::new()
    }
}

/// Fabrication (assembly) layer geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricationLayer {
    /// Closed body rectangle (Socket only; the Terminal body is fully
    /// described by `outlines`).
    pub body: Option<Rect>,

    /// Open polylines, each drawn together with its x-mirror: the
    /// Terminal half-outline, or the Socket corner chamfer cut.
    pub outlines: Vec<Polyline>,

    /// Per-bank cutout boxes.
    pub cutouts: Vec<Rect>,

    /// Pin-1 marker arrow.
    pub pin1_marker: Marker,

    /// Line width (mm).
    pub line_width: f64,
}

/// Silkscreen layer geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilkscreenLayer {
    /// Left end outline, including the Terminal pin-1 indicator leg.
    pub end_left: Polyline,

    /// Right end outline. Mirrored from the left, then corrected
    /// against the last real pin position.
    pub end_right: Polyline,

    /// Horizontal segments between adjacent banks, top and bottom.
    pub side_lines: Vec<Line>,

    /// Socket pin-1 indicator circle.
    pub pin1_circle: Option<Circle>,

    /// Line width (mm).
    pub line_width: f64,
}

/// Courtyard boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courtyard {
    /// Boundary box, centred on the footprint origin.
    pub bounds: Rect,

    /// Line width (mm).
    pub line_width: f64,
}

/// Anchor positions for the reference and value text fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextAnchors {
    /// Reference designator anchor.
    pub reference: Point,

    /// Value field anchor.
    pub value: Point,
}

/// A complete generated footprint, ready for the drawing collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Generated footprint name.
    pub name: String,

    /// Body style the footprint was built for.
    pub variant: Variant,

    /// Signal and ground pads in designator order.
    pub pads: Vec<Pad>,

    /// Mounting holes, in mirrored pairs.
    pub holes: Vec<Hole>,

    /// Fabrication layer geometry.
    pub fabrication: FabricationLayer,

    /// Silkscreen layer geometry.
    pub silkscreen: SilkscreenLayer,

    /// Courtyard boundary.
    pub courtyard: Courtyard,

    /// Reference and value text anchors.
    pub text: TextAnchors,
}

/// Builds a footprint from a parameter set.
///
/// # Errors
///
/// Returns [`Error::Config`] with the full list of violations if the
/// parameters are invalid, or [`Error::Geometry`] if they pass
/// validation but describe a degenerate outline. No partial geometry
/// is ever returned.
pub fn build(config: &Config) -> Result<Footprint, Error> {
    config.validate().map_err(Error::Config)?;

    let variant = config.layout.variant;
    let pin_table = banks::PinTable::compute(config);
    debug!(
        banks = pin_table.bank_count(),
        pins = pin_table.total_pins(),
        "computed pin layout"
    );

    // Signal pads first, then ground pads, sharing one numbering.
    let mut numbering = PadNumbering::new();
    let signal = &config.signal_pads;
    let mut pads: Vec<Pad> = pin_table
        .positions()
        .map(|pos| {
            Pad::rectangular(
                numbering.take(),
                pos.x,
                pos.y,
                signal.width,
                signal.height,
                PadRole::Signal,
            )
        })
        .collect();
    pads.extend(ground::compute(config, &pin_table, &mut numbering));

    let mut mounting_holes = holes::compute(&config.alignment_holes, pin_table.pin1().x, variant);
    mounting_holes.extend(holes::compute(
        &config.locking_pins,
        pin_table.pin1().x,
        variant,
    ));

    let fabrication = fabrication::compute(config, &pin_table)?;
    let silkscreen = silkscreen::compute(config, &pin_table);
    let (courtyard, text) = courtyard::compute(config);

    let name = naming::footprint_name(
        variant,
        config.banks.banks,
        config.banks.pins_per_bank,
        signal.pitch,
        config.banks.differential,
    );
    debug!(
        name = %name,
        pads = pads.len(),
        holes = mounting_holes.len(),
        "footprint built"
    );

    Ok(Footprint {
        name,
        variant,
        pads,
        holes: mounting_holes,
        fabrication,
        silkscreen,
        courtyard,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_loosely() {
        assert_eq!(Variant::from_str_loose("terminal"), Some(Variant::Terminal));
        assert_eq!(Variant::from_str_loose("SOCKET"), Some(Variant::Socket));
        assert_eq!(Variant::from_str_loose("plug"), None);
    }

    #[test]
    fn variant_y_signs_mirror() {
        assert!((Variant::Terminal.y_sign() + Variant::Socket.y_sign()).abs() < f64::EPSILON);
    }

    #[test]
    fn numbering_starts_at_one() {
        let mut numbering = PadNumbering::new();
        assert_eq!(numbering.take(), 1);
        assert_eq!(numbering.take(), 2);
        assert_eq!(numbering.take(), 3);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let mut cfg = Config::default();
        cfg.banks.pins_per_bank = 3;
        cfg.signal_pads.pitch = 0.0;
        match build(&cfg) {
            Err(Error::Config(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected config rejection, got {other:?}"),
        }
    }

    #[test]
    fn build_is_deterministic() {
        let cfg = Config::default();
        let a = build(&cfg).expect("valid");
        let b = build(&cfg).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn pads_are_numbered_sequentially() {
        let footprint = build(&Config::default()).expect("valid");
        for (i, pad) in footprint.pads.iter().enumerate() {
            assert_eq!(pad.number as usize, i + 1);
        }
    }
}
