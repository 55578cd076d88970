use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    db::models::{MoodEntry, SentimentScores},
    identity::Identity,
};

pub const EXPORT_DATA_TYPE: &str = "vibepoint-mood-data";
pub const EXPORT_VERSION: &str = "1.0";

/// Full-history payload returned by a data export. Built per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub exported_at: DateTime<Utc>,
    pub user_id: String,
    pub user_email: Option<String>,
    pub data_type: String,
    pub version: String,
    pub total_entries: usize,
    pub entries: Vec<ExportedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedMood {
    pub x: f64,
    pub y: f64,
    pub happiness: i64,
    pub motivation: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportedEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub mood: ExportedMood,
    pub focus: String,
    pub self_talk: String,
    pub physical: String,
    pub emotion_name: Option<String>,
    pub notes: Option<String>,
    pub sentiment: SentimentScores,
}

impl ExportBundle {
    pub fn new(identity: &Identity, entries: &[MoodEntry], exported_at: DateTime<Utc>) -> Self {
        let entries: Vec<ExportedEntry> = entries.iter().map(ExportedEntry::from).collect();
        Self {
            exported_at,
            user_id: identity.user_id.clone(),
            user_email: identity.email.clone(),
            data_type: EXPORT_DATA_TYPE.to_string(),
            version: EXPORT_VERSION.to_string(),
            total_entries: entries.len(),
            entries,
        }
    }

    /// Suggested download name, e.g. `vibepoint-export-2026-03-14.json`.
    pub fn file_name(&self) -> String {
        format!("vibepoint-export-{}.json", self.exported_at.format("%Y-%m-%d"))
    }
}

impl From<&MoodEntry> for ExportedEntry {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id.clone(),
            created_at: entry.created_at,
            mood: ExportedMood {
                x: entry.mood.x,
                y: entry.mood.y,
                happiness: entry.mood.happiness_percent(),
                motivation: entry.mood.motivation_percent(),
            },
            focus: entry.focus.clone(),
            self_talk: entry.self_talk.clone(),
            physical: entry.physical_sensations.clone(),
            emotion_name: entry.emotion_name.clone(),
            notes: entry.notes.clone(),
            sentiment: entry.sentiment.clone(),
        }
    }
}
