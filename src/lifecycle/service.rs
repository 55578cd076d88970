use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ServiceError, ServiceResult},
    identity::Identity,
    log_error, log_info, log_warn,
    store::MoodStore,
};

use super::bundle::ExportBundle;

const ENABLE_LOGS: bool = true;

/// Exact phrase a user must type to erase their history.
pub const DELETE_CONFIRMATION_PHRASE: &str = "DELETE ALL MY DATA";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeletionReceipt {
    pub success: bool,
    pub deleted_at: DateTime<Utc>,
    pub deleted_entries: u64,
}

#[derive(Clone)]
pub struct DataLifecycleService {
    store: Arc<dyn MoodStore>,
}

impl DataLifecycleService {
    pub fn new(store: Arc<dyn MoodStore>) -> Self {
        Self { store }
    }

    /// Snapshot every entry the user owns into an export bundle. No side effects.
    pub async fn export_all(
        &self,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> ServiceResult<ExportBundle> {
        let entries = self.store.list_entries(&identity.user_id).await.map_err(|err| {
            log_error!("Export failed for user {}: {err:#}", identity.user_id);
            ServiceError::Storage(err)
        })?;

        let bundle = ExportBundle::new(identity, &entries, now);
        log_info!(
            "Exported {} mood entries for user {}",
            bundle.total_entries,
            identity.user_id
        );
        Ok(bundle)
    }

    /// Permanently remove every entry the user owns.
    ///
    /// The phrase is checked before storage is touched. Success is only
    /// reported once the store has committed the whole deletion.
    pub async fn delete_all(
        &self,
        identity: &Identity,
        confirmation: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<DeletionReceipt> {
        if confirmation != DELETE_CONFIRMATION_PHRASE {
            log_warn!(
                "Rejected delete-all for user {}: confirmation mismatch",
                identity.user_id
            );
            return Err(ServiceError::InvalidConfirmation);
        }

        let deleted_entries = self
            .store
            .delete_all_entries(&identity.user_id)
            .await
            .map_err(|err| {
                log_error!("Delete-all failed for user {}: {err:#}", identity.user_id);
                ServiceError::Storage(err)
            })?;

        log_info!(
            "Deleted {deleted_entries} mood entries for user {}",
            identity.user_id
        );

        Ok(DeletionReceipt {
            success: true,
            deleted_at: now,
            deleted_entries,
        })
    }
}
