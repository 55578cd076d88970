//! Mood entry data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::MoodPoint;

/// Optional per-field sentiment scores attached to an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SentimentScores {
    pub focus: Option<f64>,
    pub self_talk: Option<f64>,
    pub physical: Option<f64>,
    pub notes: Option<f64>,
    pub overall: Option<f64>,
}

/// A persisted mood log. Never updated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub mood: MoodPoint,
    pub focus: String,
    pub self_talk: String,
    pub physical_sensations: String,
    pub emotion_name: Option<String>,
    pub notes: Option<String>,
    pub sentiment: SentimentScores,
}

/// Input for logging a new mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMoodEntry {
    pub mood: MoodPoint,
    pub focus: String,
    pub self_talk: String,
    pub physical_sensations: String,
    #[serde(default)]
    pub emotion_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sentiment: SentimentScores,
}
