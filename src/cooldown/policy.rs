//! Entry-frequency cooldown.
//!
//! The decision is recomputed from entry history on every call so that it
//! stays correct no matter which surface created the entries. Two concurrent
//! creations can both pass before either is stored; the limit is soft.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::config::CooldownConfig;

const MINUTE_MS: i64 = 60_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum CooldownDecision {
    Allowed,
    #[serde(rename_all = "camelCase")]
    Blocked { minutes_until_next: u32 },
}

impl CooldownDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CooldownDecision::Allowed)
    }

    pub fn minutes_until_next(&self) -> Option<u32> {
        match self {
            CooldownDecision::Allowed => None,
            CooldownDecision::Blocked { minutes_until_next } => Some(*minutes_until_next),
        }
    }
}

/// Decide whether a new entry may be logged at `now`.
///
/// `recent` may be in any order and may contain entries older than the
/// window. Entries stamped after `now` count as zero minutes old.
pub fn evaluate(
    recent: &[DateTime<Utc>],
    now: DateTime<Utc>,
    config: &CooldownConfig,
) -> CooldownDecision {
    let limit = config.max_entries as usize;
    if limit == 0 {
        return CooldownDecision::Allowed;
    }
    if recent.len() < limit {
        return CooldownDecision::Allowed;
    }

    let window = config.window();
    let mut ages: Vec<Duration> = recent
        .iter()
        .map(|ts| (now - *ts).max(Duration::zero()))
        .filter(|age| *age < window)
        .collect();

    if ages.len() < limit {
        return CooldownDecision::Allowed;
    }

    // Youngest first; the limit-th youngest is the one whose expiry frees a slot.
    ages.sort();
    let gating_age = ages[limit - 1];
    let remaining_ms = (window - gating_age).num_milliseconds();
    let minutes = ceil_div(remaining_ms, MINUTE_MS).max(1);

    CooldownDecision::Blocked {
        minutes_until_next: u32::try_from(minutes).unwrap_or(u32::MAX),
    }
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1).div_euclid(divisor)
}
