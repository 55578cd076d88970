use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::models::MoodEntry;

/// Persistence for mood entries. Implementations own retries, if any.
#[async_trait]
pub trait MoodStore: Send + Sync {
    async fn insert_entry(&self, entry: &MoodEntry) -> Result<()>;

    /// Every entry the user owns, newest first, read as one snapshot.
    async fn list_entries(&self, user_id: &str) -> Result<Vec<MoodEntry>>;

    /// Creation times of entries created at or after `since`, including any
    /// stamped in the future.
    async fn entry_times_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>>;

    async fn count_entries(&self, user_id: &str) -> Result<u64>;

    /// Remove every entry the user owns. Either all rows go or none do.
    async fn delete_all_entries(&self, user_id: &str) -> Result<u64>;
}
