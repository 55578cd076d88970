pub mod color;
pub mod coordinate;

pub use color::{map_color, Color, CornerColors, CORNERS};
pub use coordinate::{MoodCoordinate, MoodPoint, MOOD_SCALE_MAX};
