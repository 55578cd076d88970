//! Bilinear mood → color mapping shared by every visualization.

use serde::{Deserialize, Serialize};

use super::coordinate::MoodCoordinate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Corner colors of the mood square, named by canvas position.
#[derive(Debug, Clone, Copy)]
pub struct CornerColors {
    /// Happy, unmotivated.
    pub top_left: Color,
    /// Happy, motivated.
    pub top_right: Color,
    /// Sad, unmotivated.
    pub bottom_left: Color,
    /// Sad, motivated.
    pub bottom_right: Color,
}

pub const CORNERS: CornerColors = CornerColors {
    top_left: Color::rgb(180, 220, 255),
    top_right: Color::rgb(255, 240, 50),
    bottom_left: Color::rgb(40, 35, 45),
    bottom_right: Color::rgb(255, 20, 0),
};

/// Map a mood coordinate to its display color.
///
/// Out-of-range components are clamped to `[0, 1]` (NaN to 0) rather than
/// rejected; validating input is the caller's job.
pub fn map_color(coord: MoodCoordinate) -> Color {
    let (x, y) = coord.clamped().canvas_position();

    let weights = [
        (1.0 - x) * (1.0 - y),
        x * (1.0 - y),
        (1.0 - x) * y,
        x * y,
    ];
    let corners = [
        CORNERS.top_left,
        CORNERS.top_right,
        CORNERS.bottom_left,
        CORNERS.bottom_right,
    ];

    let blend = |channel: fn(&Color) -> u8| -> u8 {
        let value: f64 = corners
            .iter()
            .zip(weights.iter())
            .map(|(corner, weight)| f64::from(channel(corner)) * weight)
            .sum();
        value.round().clamp(0.0, 255.0) as u8
    };

    Color {
        r: blend(|c| c.r),
        g: blend(|c| c.g),
        b: blend(|c| c.b),
    }
}
