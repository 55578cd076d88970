use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use crate::{
    db::{
        connection::Database,
        helpers::{format_datetime, parse_optional_datetime},
        models::SubscriptionStatus,
    },
    subscription::SubscriptionLookup,
};

const ACTIVE_STATUSES: &[&str] = &["active", "trialing"];

impl Database {
    pub async fn get_subscription_status(&self, user_id: &str) -> Result<SubscriptionStatus> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let row = conn
                .query_row(
                    "SELECT tier, status, current_period_end FROM subscriptions WHERE user_id = ?1",
                    params![user_id],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, Option<String>>(2)?,
                        ))
                    },
                )
                .optional()?;

            let Some((tier, status, period_end)) = row else {
                return Ok(SubscriptionStatus::free());
            };

            Ok(SubscriptionStatus {
                is_active: ACTIVE_STATUSES.contains(&status.as_str()),
                tier,
                status,
                current_period_end: parse_optional_datetime(period_end, "current_period_end")?,
            })
        })
        .await
    }

    /// Record the latest billing state for a user.
    pub async fn upsert_subscription(
        &self,
        user_id: &str,
        tier: &str,
        status: &str,
        current_period_end: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        let tier = tier.to_string();
        let status = status.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO subscriptions (user_id, tier, status, current_period_end, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(user_id) DO UPDATE SET
                     tier = excluded.tier,
                     status = excluded.status,
                     current_period_end = excluded.current_period_end,
                     updated_at = excluded.updated_at",
                params![
                    user_id,
                    tier,
                    status,
                    current_period_end.as_ref().map(format_datetime),
                    format_datetime(&Utc::now()),
                ],
            )
            .with_context(|| "failed to upsert subscription")?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl SubscriptionLookup for Database {
    async fn subscription_status(&self, user_id: &str) -> Result<SubscriptionStatus> {
        self.get_subscription_status(user_id).await
    }
}
