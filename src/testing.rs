//! In-memory collaborators for unit tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    db::models::{MoodEntry, SentimentScores},
    mood::MoodPoint,
    store::MoodStore,
};

pub fn sample_entry(id: &str, user_id: &str, created_at: DateTime<Utc>) -> MoodEntry {
    MoodEntry {
        id: id.into(),
        user_id: user_id.into(),
        created_at,
        mood: MoodPoint::new(50.0, 50.0),
        focus: "the day ahead".into(),
        self_talk: "steady".into(),
        physical_sensations: "calm".into(),
        emotion_name: None,
        notes: None,
        sentiment: SentimentScores::default(),
    }
}

/// Store that keeps entries in a vector and counts writes.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<MoodEntry>>,
    mutations: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn fail_next_operations(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    pub fn entries_for(&self, user_id: &str) -> Vec<MoodEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("storage unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl MoodStore for MemoryStore {
    async fn insert_entry(&self, entry: &MoodEntry) -> Result<()> {
        self.check()?;
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn list_entries(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        self.check()?;
        let mut entries = self.entries_for(user_id);
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn entry_times_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        self.check()?;
        Ok(self
            .entries_for(user_id)
            .into_iter()
            .map(|e| e.created_at)
            .filter(|ts| *ts >= since)
            .collect())
    }

    async fn count_entries(&self, user_id: &str) -> Result<u64> {
        self.check()?;
        Ok(self.entries_for(user_id).len() as u64)
    }

    async fn delete_all_entries(&self, user_id: &str) -> Result<u64> {
        self.check()?;
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.user_id != user_id);
        Ok((before - entries.len()) as u64)
    }
}
