//! qstrip-footprint: parametric Q-Strip connector footprint generator
//!
//! This library computes the complete 2D footprint geometry for the
//! Q-Strip family of high-density, multi-bank board-to-board
//! connectors: signal pads, ground plane pads, mounting holes, and
//! outline polylines for the fabrication, silkscreen, and courtyard
//! layers.
//!
//! # Architecture
//!
//! A build is a pure function from a parameter set to geometry:
//!
//! ```text
//! Config -> PinTable -> { ground pads, holes, fab outline,
//!                         silkscreen, courtyard } -> Footprint
//! ```
//!
//! The [`qstrip::Footprint`] output is plain data; drawing it onto a
//! board, registering with a host EDA tool, and parameter GUIs are the
//! caller's business. Everything is in millimetres, centred on the
//! footprint origin.
//!
//! # Modules
//!
//! - [`config`] — parameter groups, loading, and validation
//! - [`error`] — error types
//! - [`geometry`] — points, pads, holes, polylines, grid snapping
//! - [`qstrip`] — the layout engine itself

pub mod config;
pub mod error;
pub mod geometry;
pub mod qstrip;

pub use error::Error;
pub use qstrip::{build, Footprint, Variant};
