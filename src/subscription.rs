use anyhow::Result;
use async_trait::async_trait;

use crate::db::models::SubscriptionStatus;

#[async_trait]
pub trait SubscriptionLookup: Send + Sync {
    async fn subscription_status(&self, user_id: &str) -> Result<SubscriptionStatus>;
}
