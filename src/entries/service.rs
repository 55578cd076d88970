//! Mood logging: cooldown-gated creation plus read models for the history views.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    cooldown::{self, CooldownDecision},
    db::models::{MoodEntry, NewMoodEntry},
    encouragement,
    error::{ServiceError, ServiceResult},
    identity::Identity,
    log_info,
    mood::{map_color, Color},
    settings::ProductLimits,
    store::MoodStore,
};

const ENABLE_LOGS: bool = true;

/// A freshly stored entry and what the next attempt would get.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEntry {
    pub entry: MoodEntry,
    pub color: Color,
    pub next_entry: CooldownDecision,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub color: Color,
    pub color_hex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_entries: u64,
    pub patterns_unlocked: bool,
    pub entries_until_patterns: u64,
    pub encouragement: String,
}

#[derive(Clone)]
pub struct EntryService {
    store: Arc<dyn MoodStore>,
    limits: ProductLimits,
}

impl EntryService {
    pub fn new(store: Arc<dyn MoodStore>, limits: ProductLimits) -> Self {
        Self { store, limits }
    }

    /// Evaluate the cooldown from stored history, e.g. on page load.
    pub async fn cooldown_status(
        &self,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> ServiceResult<CooldownDecision> {
        let since = now - self.limits.cooldown.window();
        let recent = self.store.entry_times_since(&identity.user_id, since).await?;
        Ok(cooldown::evaluate(&recent, now, &self.limits.cooldown))
    }

    pub async fn create_entry(
        &self,
        identity: &Identity,
        input: NewMoodEntry,
        now: DateTime<Utc>,
    ) -> ServiceResult<CreatedEntry> {
        input
            .mood
            .validate()
            .map_err(|err| ServiceError::InvalidEntry(err.to_string()))?;

        let focus = required_text(&input.focus, "focus")?;
        let self_talk = required_text(&input.self_talk, "selfTalk")?;
        let physical_sensations = required_text(&input.physical_sensations, "physicalSensations")?;

        let since = now - self.limits.cooldown.window();
        let mut recent = self.store.entry_times_since(&identity.user_id, since).await?;
        if let CooldownDecision::Blocked { minutes_until_next } =
            cooldown::evaluate(&recent, now, &self.limits.cooldown)
        {
            log_info!(
                "Entry blocked for user {}: cooling down for {minutes_until_next} minute(s)",
                identity.user_id
            );
            return Err(ServiceError::CoolingDown { minutes_until_next });
        }

        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            user_id: identity.user_id.clone(),
            // Stored timestamps keep microseconds.
            created_at: now.trunc_subsecs(6),
            mood: input.mood,
            focus,
            self_talk,
            physical_sensations,
            emotion_name: optional_text(input.emotion_name),
            notes: optional_text(input.notes),
            sentiment: input.sentiment,
        };

        self.store.insert_entry(&entry).await?;
        log_info!("Stored mood entry {} for user {}", entry.id, identity.user_id);

        recent.push(entry.created_at);
        let next_entry = cooldown::evaluate(&recent, now, &self.limits.cooldown);

        Ok(CreatedEntry {
            color: map_color(entry.mood.coordinate()),
            entry,
            next_entry,
        })
    }

    /// Stored entries, newest first, each with its display color.
    pub async fn list_entries(&self, identity: &Identity) -> ServiceResult<Vec<EntryView>> {
        let entries = self.store.list_entries(&identity.user_id).await?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let color = map_color(entry.mood.coordinate());
                EntryView {
                    color_hex: color.to_hex(),
                    color,
                    entry,
                }
            })
            .collect())
    }

    pub async fn progress(&self, identity: &Identity, today: NaiveDate) -> ServiceResult<Progress> {
        let total_entries = self.store.count_entries(&identity.user_id).await?;
        let unlock_at = u64::from(self.limits.patterns_unlock_entries);

        Ok(Progress {
            total_entries,
            patterns_unlocked: total_entries >= unlock_at,
            entries_until_patterns: unlock_at.saturating_sub(total_entries),
            encouragement: encouragement::message_for_date(today).to_string(),
        })
    }
}

fn required_text(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidEntry(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::models::SentimentScores,
        mood::MoodPoint,
        testing::{sample_entry, MemoryStore},
    };
    use chrono::Duration;

    fn identity() -> Identity {
        Identity {
            user_id: "u1".into(),
            email: None,
        }
    }

    fn input() -> NewMoodEntry {
        NewMoodEntry {
            mood: MoodPoint::new(100.0, 0.0),
            focus: "  launch day ".into(),
            self_talk: "we've got this".into(),
            physical_sensations: "buzzing".into(),
            emotion_name: Some("  ".into()),
            notes: Some(" shipped it ".into()),
            sentiment: SentimentScores::default(),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-05-02T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn service_with(entries: Vec<MoodEntry>) -> (Arc<MemoryStore>, EntryService) {
        let store = Arc::new(MemoryStore::with_entries(entries));
        let service = EntryService::new(store.clone(), ProductLimits::default());
        (store, service)
    }

    #[tokio::test]
    async fn creates_entry_with_trimmed_text_and_color() {
        let (store, service) = service_with(vec![]);

        let created = service.create_entry(&identity(), input(), now()).await.unwrap();
        assert_eq!(created.entry.focus, "launch day");
        assert_eq!(created.entry.emotion_name, None);
        assert_eq!(created.entry.notes.as_deref(), Some("shipped it"));
        assert_eq!(created.color, Color::rgb(255, 240, 50));
        assert!(created.next_entry.is_allowed());
        assert_eq!(store.entries_for("u1").len(), 1);
    }

    #[tokio::test]
    async fn created_at_is_truncated_to_microseconds() {
        let (store, service) = service_with(vec![]);
        let now = now() + Duration::nanoseconds(255_828_365);

        let created = service.create_entry(&identity(), input(), now).await.unwrap();
        assert_eq!(created.entry.created_at, self::now() + Duration::microseconds(255_828));
        assert_eq!(store.entries_for("u1")[0].created_at, created.entry.created_at);
    }

    #[tokio::test]
    async fn third_entry_in_window_reports_upcoming_cooldown() {
        let now = now();
        let (_store, service) = service_with(vec![
            sample_entry("a", "u1", now - Duration::minutes(5)),
            sample_entry("b", "u1", now - Duration::minutes(20)),
            sample_entry("c", "u1", now - Duration::minutes(40)),
        ]);

        let created = service.create_entry(&identity(), input(), now).await.unwrap();
        assert_eq!(created.next_entry.minutes_until_next(), Some(10));

        let err = service.create_entry(&identity(), input(), now).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::CoolingDown {
                minutes_until_next: 10
            }
        ));
    }

    #[tokio::test]
    async fn blocked_attempt_does_not_write() {
        let now = now();
        let (store, service) = service_with(vec![
            sample_entry("a", "u1", now - Duration::minutes(5)),
            sample_entry("b", "u1", now - Duration::minutes(15)),
            sample_entry("c", "u1", now - Duration::minutes(25)),
        ]);

        let err = service.create_entry(&identity(), input(), now).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::CoolingDown {
                minutes_until_next: 5
            }
        ));
        assert_eq!(store.mutation_count(), 0);
        assert_eq!(
            service.cooldown_status(&identity(), now).await.unwrap(),
            CooldownDecision::Blocked {
                minutes_until_next: 5
            }
        );
    }

    #[tokio::test]
    async fn other_users_do_not_count_toward_cooldown() {
        let now = now();
        let (_store, service) = service_with(vec![
            sample_entry("a", "u2", now - Duration::minutes(1)),
            sample_entry("b", "u2", now - Duration::minutes(2)),
            sample_entry("c", "u2", now - Duration::minutes(3)),
        ]);
        assert!(service
            .cooldown_status(&identity(), now)
            .await
            .unwrap()
            .is_allowed());
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_storage() {
        let (store, service) = service_with(vec![]);

        let mut out_of_range = input();
        out_of_range.mood = MoodPoint::new(101.0, 5.0);
        assert!(matches!(
            service.create_entry(&identity(), out_of_range, now()).await,
            Err(ServiceError::InvalidEntry(_))
        ));

        let mut blank = input();
        blank.self_talk = "   ".into();
        assert!(matches!(
            service.create_entry(&identity(), blank, now()).await,
            Err(ServiceError::InvalidEntry(_))
        ));

        assert_eq!(store.mutation_count(), 0);
    }

    #[tokio::test]
    async fn listed_entries_carry_their_colors() {
        let now = now();
        let mut sad = sample_entry("sad", "u1", now);
        sad.mood = MoodPoint::new(0.0, 100.0);
        let (_store, service) = service_with(vec![sad]);

        let views = service.list_entries(&identity()).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].color, Color::rgb(40, 35, 45));
        assert_eq!(views[0].color_hex, "#28232d");
    }

    #[tokio::test]
    async fn progress_tracks_pattern_unlock() {
        let now = now();
        let entries = (0..4)
            .map(|i| sample_entry(&format!("e{i}"), "u1", now - Duration::days(i)))
            .collect();
        let (_store, service) = service_with(entries);

        let today = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        let progress = service.progress(&identity(), today).await.unwrap();
        assert_eq!(progress.total_entries, 4);
        assert!(!progress.patterns_unlocked);
        assert_eq!(progress.entries_until_patterns, 6);
        assert_eq!(progress.encouragement, encouragement::message_for_day(2));
    }

    #[tokio::test]
    async fn storage_errors_surface_as_storage_failures() {
        let (store, service) = service_with(vec![]);
        store.fail_next_operations(true);
        assert!(matches!(
            service.create_entry(&identity(), input(), now()).await,
            Err(ServiceError::Storage(_))
        ));
    }
}
