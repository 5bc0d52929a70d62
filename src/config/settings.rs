//! Parameter group structures for deserialisation.
//!
//! These structures map directly to the JSON parameter file format. The
//! defaults reproduce the QTE/QTS 3-bank, 60-pin, 0.5 mm pitch part the
//! generator was originally written around, so an empty `{}` parameter
//! file produces a complete, valid footprint.
//!
//! All lengths are millimetres.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::qstrip::Variant;

/// Root parameter set.
///
/// Immutable for the duration of a build; every builder reads from it
/// and none of them writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Body outline and silkscreen parameters.
    pub layout: LayoutConfig,

    /// Pin bank topology.
    pub banks: BanksConfig,

    /// Signal pad dimensions.
    pub signal_pads: SignalPadsConfig,

    /// Ground plane pad dimensions.
    pub ground_pads: GroundPadsConfig,

    /// Non-plated alignment hole pair.
    pub alignment_holes: HoleFamilyConfig,

    /// Plated locking pin pair (disabled by default).
    pub locking_pins: HoleFamilyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            banks: BanksConfig::default(),
            signal_pads: SignalPadsConfig::default(),
            ground_pads: GroundPadsConfig::default(),
            alignment_holes: HoleFamilyConfig::alignment_defaults(),
            locking_pins: HoleFamilyConfig::locking_defaults(),
        }
    }
}

impl Config {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns every violation found, not just the first, so a caller
    /// can report all bad fields in one pass. No geometry may be
    /// computed from a configuration that fails this check.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Collects all parameter violations.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.banks.banks == 0 {
            errors.push(ConfigError::NoBanks);
        }
        // Pins are laid out two at a time, one per row.
        if self.banks.pins_per_bank < 2 || self.banks.pins_per_bank % 2 != 0 {
            errors.push(ConfigError::OddPinCount(self.banks.pins_per_bank));
        }

        let positive = [
            ("layout.connector_height", self.layout.connector_height),
            ("banks.spacing", self.banks.spacing),
            ("banks.height", self.banks.height),
            ("signal_pads.pitch", self.signal_pads.pitch),
            ("signal_pads.width", self.signal_pads.width),
            ("signal_pads.height", self.signal_pads.height),
            ("ground_pads.height", self.ground_pads.height),
            ("ground_pads.width_inner", self.ground_pads.width_inner),
            ("ground_pads.width_outer", self.ground_pads.width_outer),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                errors.push(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("layout.silkscreen_offset", self.layout.silkscreen_offset),
            ("banks.width", self.banks.width),
            ("signal_pads.y_offset", self.signal_pads.y_offset),
            ("ground_pads.spacing_inner", self.ground_pads.spacing_inner),
            ("ground_pads.spacing_outer", self.ground_pads.spacing_outer),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                errors.push(ConfigError::Negative { field, value });
            }
        }

        if self.ground_pads.spacing_inner >= self.ground_pads.spacing_outer {
            errors.push(ConfigError::GroundSpacingInverted {
                inner: self.ground_pads.spacing_inner,
                outer: self.ground_pads.spacing_outer,
            });
        }

        errors.extend(self.alignment_holes.validation_errors(
            "alignment_holes.drill",
            "alignment_holes.y_offset",
        ));
        errors.extend(
            self.locking_pins
                .validation_errors("locking_pins.drill", "locking_pins.y_offset"),
        );

        errors
    }
}

/// Body outline and silkscreen parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LayoutConfig {
    /// Terminal or Socket body style.
    pub variant: Variant,

    /// Connector body height (the outline's y extent).
    pub connector_height: f64,

    /// Outward clearance between the body outline and the silkscreen.
    pub silkscreen_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Terminal,
            connector_height: 5.97,
            silkscreen_offset: 0.25,
        }
    }
}

/// Pin bank topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BanksConfig {
    /// Number of banks.
    pub banks: u32,

    /// Signal pins per bank, split evenly across two rows.
    pub pins_per_bank: u32,

    /// Number of leading banks laid out for differential pairs.
    ///
    /// Differential banks drop every third pin pair to widen isolation.
    /// Values larger than `banks` are accepted; the bank count clamps
    /// them implicitly.
    pub differential: u32,

    /// Centre-to-centre spacing between adjacent banks.
    pub spacing: f64,

    /// Nominal bank width from the datasheet. The drawn bank cutouts
    /// use the outer ground pad span instead.
    pub width: f64,

    /// Bank cutout height on the fabrication layer.
    pub height: f64,
}

impl Default for BanksConfig {
    fn default() -> Self {
        Self {
            banks: 3,
            pins_per_bank: 60,
            differential: 0,
            spacing: 20.0,
            width: 16.4,
            height: 3.9,
        }
    }
}

/// Signal pad dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SignalPadsConfig {
    /// Centre-to-centre pin spacing within a row.
    pub pitch: f64,

    /// Pad width (x extent).
    pub width: f64,

    /// Pad height (y extent).
    pub height: f64,

    /// Row distance from the board centreline.
    pub y_offset: f64,
}

impl Default for SignalPadsConfig {
    fn default() -> Self {
        Self {
            pitch: 0.5,
            width: 0.305,
            height: 1.45,
            y_offset: 3.086,
        }
    }
}

/// Ground plane pad dimensions.
///
/// Each bank carries four ground pads on the centreline: an inner pair
/// and an outer pair, symmetric about the bank midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GroundPadsConfig {
    /// Pad height (y extent), shared by all four pads.
    pub height: f64,

    /// Width of the inner pad pair.
    pub width_inner: f64,

    /// Width of the outer pad pair.
    pub width_outer: f64,

    /// Centre-to-centre spacing of the inner pair.
    pub spacing_inner: f64,

    /// Centre-to-centre spacing of the outer pair.
    pub spacing_outer: f64,
}

impl Default for GroundPadsConfig {
    fn default() -> Self {
        Self {
            height: 0.64,
            width_inner: 4.7,
            width_outer: 2.54,
            spacing_inner: 6.35,
            spacing_outer: 16.89,
        }
    }
}

/// A mirrored pair of mounting holes.
///
/// Two independent families exist (alignment holes and locking pins);
/// each can be enabled on its own and the results are unioned. The
/// parameters are trusted to keep the families clear of each other:
/// collision avoidance is out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct HoleFamilyConfig {
    /// Whether this family is emitted at all.
    pub enabled: bool,

    /// Drill diameter.
    pub drill: f64,

    /// Annular ring (pad) diameter. `None`, or any value not larger
    /// than the drill, makes the hole non-plated.
    pub pad_diameter: Option<f64>,

    /// Inward x distance from the pin-1 column.
    pub x_offset: f64,

    /// Y distance from the centreline; the sign follows the variant.
    pub y_offset: f64,
}

impl Default for HoleFamilyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            drill: 1.02,
            pad_diameter: None,
            x_offset: 1.989,
            y_offset: 2.03,
        }
    }
}

impl HoleFamilyConfig {
    /// The legacy alignment hole pair, enabled by default.
    #[must_use]
    pub const fn alignment_defaults() -> Self {
        Self {
            enabled: true,
            drill: 1.02,
            pad_diameter: None,
            x_offset: 1.989,
            y_offset: 2.03,
        }
    }

    /// The plated locking pin pair, disabled by default.
    #[must_use]
    pub const fn locking_defaults() -> Self {
        Self {
            enabled: false,
            drill: 1.45,
            pad_diameter: Some(2.05),
            x_offset: 3.71,
            y_offset: 0.0,
        }
    }

    /// Collects violations for this family, if enabled.
    fn validation_errors(
        &self,
        drill_field: &'static str,
        y_field: &'static str,
    ) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !self.enabled {
            return errors;
        }
        if self.drill <= 0.0 {
            errors.push(ConfigError::NonPositive {
                field: drill_field,
                value: self.drill,
            });
        }
        if self.y_offset < 0.0 {
            errors.push(ConfigError::Negative {
                field: y_field,
                value: self.y_offset,
            });
        }
        errors
    }
}
