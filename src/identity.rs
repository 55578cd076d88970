use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Caller identity supplied by the authentication layer and trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token. `Ok(None)` means the token is unknown.
    async fn resolve_token(&self, token: &str) -> Result<Option<Identity>>;
}
