//! Mood coordinate representations.
//!
//! Entries are stored on the 0–100 `mood_x`/`mood_y` scale where `y` grows
//! downward (sadder). Everything that reasons about mood works on the unit
//! `MoodCoordinate` instead.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const MOOD_SCALE_MAX: f64 = 100.0;

/// Point on the stored 0–100 scale. `x` is motivation, `y` is inverted happiness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MoodPoint {
    pub x: f64,
    pub y: f64,
}

/// Unit-square mood coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MoodCoordinate {
    pub happiness: f64,
    pub motivation: f64,
}

impl MoodPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rejects points that would put a persisted entry outside the mood domain.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() {
                bail!("mood {name} must be a finite number");
            }
            if !(0.0..=MOOD_SCALE_MAX).contains(&value) {
                bail!("mood {name} must be between 0 and {MOOD_SCALE_MAX}, got {value}");
            }
        }
        Ok(())
    }

    pub fn coordinate(&self) -> MoodCoordinate {
        MoodCoordinate {
            happiness: (MOOD_SCALE_MAX - self.y) / MOOD_SCALE_MAX,
            motivation: self.x / MOOD_SCALE_MAX,
        }
    }

    /// Whole-number happiness as shown in exports (`round(100 - y)`).
    pub fn happiness_percent(&self) -> i64 {
        (MOOD_SCALE_MAX - self.y).round() as i64
    }

    /// Whole-number motivation as shown in exports (`round(x)`).
    pub fn motivation_percent(&self) -> i64 {
        self.x.round() as i64
    }
}

impl MoodCoordinate {
    pub fn new(happiness: f64, motivation: f64) -> Self {
        Self {
            happiness,
            motivation,
        }
    }

    /// Copy with both components forced into `[0, 1]`. NaN collapses to 0.
    pub fn clamped(&self) -> Self {
        Self {
            happiness: clamp_unit(self.happiness),
            motivation: clamp_unit(self.motivation),
        }
    }

    /// Canvas-style position: `x = motivation`, `y = 1 - happiness`.
    pub fn canvas_position(&self) -> (f64, f64) {
        (self.motivation, 1.0 - self.happiness)
    }
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
