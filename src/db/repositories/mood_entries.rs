use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::{
    db::{
        connection::Database,
        helpers::{format_datetime, parse_datetime, to_u64},
        models::{MoodEntry, SentimentScores},
    },
    mood::MoodPoint,
    store::MoodStore,
};

const ENTRY_COLUMNS: &str = "id, user_id, created_at, mood_x, mood_y, focus, self_talk, physical_sensations,
     emotion_name, notes, focus_sentiment, self_talk_sentiment, physical_sentiment,
     notes_sentiment, overall_sentiment";

fn row_to_entry(row: &Row) -> Result<MoodEntry> {
    let created_at: String = row.get("created_at")?;

    Ok(MoodEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        created_at: parse_datetime(&created_at, "created_at")?,
        mood: MoodPoint::new(row.get("mood_x")?, row.get("mood_y")?),
        focus: row.get("focus")?,
        self_talk: row.get("self_talk")?,
        physical_sensations: row.get("physical_sensations")?,
        emotion_name: row.get("emotion_name")?,
        notes: row.get("notes")?,
        sentiment: SentimentScores {
            focus: row.get("focus_sentiment")?,
            self_talk: row.get("self_talk_sentiment")?,
            physical: row.get("physical_sentiment")?,
            notes: row.get("notes_sentiment")?,
            overall: row.get("overall_sentiment")?,
        },
    })
}

impl Database {
    pub async fn insert_mood_entry(&self, entry: &MoodEntry) -> Result<()> {
        let record = entry.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO mood_entries (id, user_id, created_at, mood_x, mood_y, focus, self_talk,
                     physical_sensations, emotion_name, notes, focus_sentiment, self_talk_sentiment,
                     physical_sentiment, notes_sentiment, overall_sentiment)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                params![
                    record.id,
                    record.user_id,
                    format_datetime(&record.created_at),
                    record.mood.x,
                    record.mood.y,
                    record.focus,
                    record.self_talk,
                    record.physical_sensations,
                    record.emotion_name,
                    record.notes,
                    record.sentiment.focus,
                    record.sentiment.self_talk,
                    record.sentiment.physical,
                    record.sentiment.notes,
                    record.sentiment.overall,
                ],
            )
            .with_context(|| "failed to insert mood entry")?;
            Ok(())
        })
        .await
    }

    pub async fn list_mood_entries(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ENTRY_COLUMNS}
                 FROM mood_entries
                 WHERE user_id = ?1
                 ORDER BY created_at DESC, id ASC"
            ))?;

            let mut rows = stmt.query(params![user_id])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_entry(row)?);
            }

            Ok(entries)
        })
        .await
    }

    pub async fn mood_entry_times_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT created_at FROM mood_entries
                 WHERE user_id = ?1 AND created_at >= ?2
                 ORDER BY created_at DESC",
            )?;

            let mut rows = stmt.query(params![user_id, format_datetime(&since)])?;
            let mut times = Vec::new();
            while let Some(row) = rows.next()? {
                times.push(parse_datetime(&row.get::<_, String>(0)?, "created_at")?);
            }

            Ok(times)
        })
        .await
    }

    pub async fn count_mood_entries(&self, user_id: &str) -> Result<u64> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM mood_entries WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )?;
            to_u64(count, "entry count")
        })
        .await
    }

    /// Delete every mood entry owned by the user inside one transaction.
    pub async fn delete_all_mood_entries(&self, user_id: &str) -> Result<u64> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let tx = conn.transaction()?;

            let deleted = tx
                .execute(
                    "DELETE FROM mood_entries WHERE user_id = ?1",
                    params![user_id],
                )
                .with_context(|| "failed to delete mood entries")?;

            tx.commit().with_context(|| "failed to commit mood entry deletion")?;
            Ok(deleted as u64)
        })
        .await
    }
}

#[async_trait]
impl MoodStore for Database {
    async fn insert_entry(&self, entry: &MoodEntry) -> Result<()> {
        self.insert_mood_entry(entry).await
    }

    async fn list_entries(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        self.list_mood_entries(user_id).await
    }

    async fn entry_times_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        self.mood_entry_times_since(user_id, since).await
    }

    async fn count_entries(&self, user_id: &str) -> Result<u64> {
        self.count_mood_entries(user_id).await
    }

    async fn delete_all_entries(&self, user_id: &str) -> Result<u64> {
        self.delete_all_mood_entries(user_id).await
    }
}
