//! RGB color model with a bounded-range invariant and a similarity metric.

use crate::error::SimError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Visual color of a creature.
///
/// Channels are validated into `[0, 255]` at construction and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color, rejecting any channel outside `[0, 255]`.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, SimError> {
        Ok(Self {
            r: channel("red", red)?,
            g: channel("green", green)?,
            b: channel("blue", blue)?,
        })
    }

    /// Similarity to `other` in `[0, 1]`: one minus the Euclidean
    /// distance in channel space, normalized by the largest possible
    /// distance. Identical colors score 1, black against white scores 0.
    #[must_use]
    pub fn similarity(&self, other: &Rgb) -> f64 {
        let max_distance = (3.0 * 255.0_f64 * 255.0).sqrt();
        let squared: f64 = [
            f64::from(self.r) - f64::from(other.r),
            f64::from(self.g) - f64::from(other.g),
            f64::from(self.b) - f64::from(other.b),
        ]
        .iter()
        .map(|d| d * d)
        .sum();
        1.0 - squared.sqrt() / max_distance
    }

    /// Draws a color with each channel uniform in `[0, 255)`.
    ///
    /// The upper bound is exclusive, so 255 is never drawn here even
    /// though [`Rgb::new`] accepts it.
    pub fn random_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..255),
            g: rng.gen_range(0..255),
            b: rng.gen_range(0..255),
        }
    }

    /// Draws a random color from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    /// Per-channel arithmetic mean of two colors.
    ///
    /// Half-way values round to even (banker's rounding), applied to
    /// each channel independently.
    #[must_use]
    pub fn midpoint(&self, other: &Rgb) -> Self {
        Self {
            r: mean_channel(self.r, other.r),
            g: mean_channel(self.g, other.g),
            b: mean_channel(self.b, other.b),
        }
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, SimError> {
    u8::try_from(value).map_err(|_| SimError::ChannelOutOfRange {
        channel: name,
        value,
    })
}

// Means of two u8 channels only ever produce .0 or .5 fractions, so
// ties-to-even is exact here.
fn mean_channel(a: u8, b: u8) -> u8 {
    ((f64::from(a) + f64::from(b)) / 2.0).round_ties_even() as u8
}
