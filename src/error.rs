//! Error types for qstrip-footprint.
//!
//! Parameter problems are reported before any geometry is computed, and
//! they are reported all at once: [`Error::Config`] carries the full
//! list of violations so a caller can surface every bad field in a
//! single pass instead of fixing them one build at a time.

use std::path::PathBuf;

use thiserror::Error;

/// A single invalid parameter in the connector configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length parameter that must be strictly positive is not.
    #[error("'{field}' must be positive (got {value})")]
    NonPositive {
        /// Dotted parameter name, e.g. `signal_pads.pitch`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A length parameter is negative.
    #[error("'{field}' must not be negative (got {value})")]
    Negative {
        /// Dotted parameter name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The pin count cannot be paired into two rows.
    #[error("'banks.pins_per_bank' must be even and at least 2 (got {0})")]
    OddPinCount(u32),

    /// A connector needs at least one bank.
    #[error("'banks.banks' must be at least 1")]
    NoBanks,

    /// The inner ground pad pair would sit outside the outer pair.
    #[error(
        "'ground_pads.spacing_inner' ({inner}) must be smaller than 'ground_pads.spacing_outer' ({outer})"
    )]
    GroundSpacingInverted {
        /// Inner pair spacing.
        inner: f64,
        /// Outer pair spacing.
        outer: f64,
    },
}

/// Geometric degeneracy discovered while building a footprint.
///
/// These are conditions the parameter checks cannot rule out on their
/// own; the builder refuses to emit self-intersecting or collapsed
/// outlines rather than clamping silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The corner chamfer would consume more than half the body height,
    /// making the outline self-intersect.
    #[error("chamfer ({chamfer}mm) must be smaller than half the body height ({half_height}mm)")]
    ChamferExceedsBody {
        /// Computed chamfer length.
        chamfer: f64,
        /// Half the connector body height.
        half_height: f64,
    },

    /// The body outline has no area.
    #[error("body outline is degenerate ({width}mm x {height}mm)")]
    DegenerateOutline {
        /// Computed body width.
        width: f64,
        /// Computed body height.
        height: f64,
    },
}

/// Top-level error for a footprint build or a CLI invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more configuration parameters were rejected.
    #[error("invalid configuration: {}", format_config_errors(.0))]
    Config(Vec<ConfigError>),

    /// The parameters passed validation but produce degenerate geometry.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A parameter file could not be read.
    #[error("failed to read parameter file: {path}")]
    ReadFile {
        /// Path to the parameter file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A parameter file could not be parsed.
    #[error("failed to parse parameter file: {path}")]
    ParseFile {
        /// Path to the parameter file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Joins a list of configuration errors into one display line.
fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
