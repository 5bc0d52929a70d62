//! Bank layout calculation.
//!
//! Produces the ordered table of signal pad centres, one inner list per
//! bank. The whole multi-bank array is centred on x = 0 regardless of
//! bank count parity, and the two rows are vertical reflections of each
//! other through the centreline.
//!
//! Differential banks drop every third pin pair (raw indices 4 and 5 of
//! each group of six), leaving a gap that widens isolation between
//! differential pairs. The dropped positions are never emitted, but the
//! position formulas always use the raw pin index, so a skip does not
//! shift the pins that follow it.

use crate::config::Config;
use crate::geometry::Point;

/// Ordered signal pad centres, grouped by bank.
///
/// Built once per footprint and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PinTable {
    banks: Vec<Vec<Point>>,
    pin1: Point,
    bank1_mid: f64,
    bank_spacing: f64,
    last_pin: Point,
}

impl PinTable {
    /// Computes the pin layout for a validated parameter set.
    #[must_use]
    pub fn compute(config: &Config) -> Self {
        let banks = config.banks.banks;
        let pins_per_bank = config.banks.pins_per_bank;
        let differential = config.banks.differential;
        let bank_spacing = config.banks.spacing;
        let pitch = config.signal_pads.pitch;

        // Pin 1 reference position. The x term centres the array on
        // x = 0 for any bank count; the y sign mirrors the variant.
        let pin1 = Point::new(
            -(f64::from(pins_per_bank) / 4.0) * pitch + pitch / 2.0
                - (f64::from(banks - 1) / 2.0) * bank_spacing,
            config.layout.variant.y_sign() * config.signal_pads.y_offset,
        );

        let bank1_mid = pin1.x - pitch / 2.0 + (f64::from(pins_per_bank) / 4.0) * pitch;

        let mut table: Vec<Vec<Point>> = Vec::with_capacity(banks as usize);
        let mut last_pin = pin1;
        for b in 0..banks {
            let mut bank = Vec::with_capacity(pins_per_bank as usize);
            for p in 0..pins_per_bank {
                if b < differential && is_differential_gap(p) {
                    continue;
                }
                // Raw index p drives both coordinates so that skipped
                // pins leave a real gap instead of closing ranks.
                let pos = Point::new(
                    pin1.x + f64::from(p / 2) * pitch + f64::from(b) * bank_spacing,
                    pin1.y - f64::from(p % 2) * (2.0 * pin1.y),
                );
                bank.push(pos);
                last_pin = pos;
            }
            table.push(bank);
        }

        Self {
            banks: table,
            pin1,
            bank1_mid,
            bank_spacing,
            last_pin,
        }
    }

    /// Pin centres grouped by bank.
    #[must_use]
    pub fn banks(&self) -> &[Vec<Point>] {
        &self.banks
    }

    /// Iterates over all emitted pin centres in designator order.
    pub fn positions(&self) -> impl Iterator<Item = &Point> {
        self.banks.iter().flatten()
    }

    /// The pin-1 reference position.
    #[must_use]
    pub const fn pin1(&self) -> Point {
        self.pin1
    }

    /// The final emitted pin of the final bank.
    ///
    /// This is the anchor for the silkscreen correction step: with
    /// differential gaps the rightmost pad is not the mirror image of
    /// the leftmost one.
    #[must_use]
    pub const fn last_pin(&self) -> Point {
        self.last_pin
    }

    /// Midpoint x of bank `b`.
    #[must_use]
    pub fn bank_mid(&self, b: u32) -> f64 {
        self.bank1_mid + f64::from(b) * self.bank_spacing
    }

    /// Number of banks.
    #[must_use]
    pub fn bank_count(&self) -> u32 {
        u32::try_from(self.banks.len()).unwrap_or(u32::MAX)
    }

    /// Total number of emitted pins across all banks.
    #[must_use]
    pub fn total_pins(&self) -> usize {
        self.banks.iter().map(Vec::len).sum()
    }
}

/// Whether raw pin index `p` is dropped in a differential bank.
///
/// Indices 4 and 5 of every group of six are removed, i.e. the pair
/// after every third signal pair.
const fn is_differential_gap(p: u32) -> bool {
    (p + 1) % 6 == 0 || (p + 2) % 6 == 0
}
