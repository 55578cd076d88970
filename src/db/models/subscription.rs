//! Subscription status as reported to clients. The billing side writes these
//! rows; this service only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub tier: String,
    pub status: String,
    pub is_active: bool,
    pub current_period_end: Option<DateTime<Utc>>,
}

impl SubscriptionStatus {
    pub fn free() -> Self {
        Self {
            tier: "free".into(),
            status: "inactive".into(),
            is_active: false,
            current_period_end: None,
        }
    }
}
