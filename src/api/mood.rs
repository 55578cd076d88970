use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::mood::{map_color, Color, MoodCoordinate};

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    pub happiness: f64,
    pub motivation: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ColorPreview {
    pub color: Color,
    pub hex: String,
}

/// GET /api/mood/color
///
/// Color for an in-progress coordinate. Values are clamped.
pub async fn color_preview(
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> Result<Json<ColorPreview>, ApiError> {
    let Query(query) = query?;
    let color = map_color(MoodCoordinate::new(query.happiness, query.motivation));
    Ok(Json(ColorPreview {
        hex: color.to_hex(),
        color,
    }))
}
