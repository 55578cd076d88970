//! HTTP surface.

pub mod auth;
pub mod data;
pub mod entries;
pub mod error;
pub mod mood;
pub mod subscriptions;

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{
    db::Database,
    entries::EntryService,
    identity::IdentityProvider,
    lifecycle::DataLifecycleService,
    settings::ProductLimits,
    store::MoodStore,
    subscription::SubscriptionLookup,
};

/// Shared handler state. Every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub subscriptions: Arc<dyn SubscriptionLookup>,
    pub entries: EntryService,
    pub lifecycle: DataLifecycleService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn MoodStore>,
        identity: Arc<dyn IdentityProvider>,
        subscriptions: Arc<dyn SubscriptionLookup>,
        limits: ProductLimits,
    ) -> Self {
        Self {
            identity,
            subscriptions,
            entries: EntryService::new(store.clone(), limits),
            lifecycle: DataLifecycleService::new(store),
        }
    }

    /// State where the database plays every collaborator role.
    pub fn from_database(db: Database, limits: ProductLimits) -> Self {
        let db = Arc::new(db);
        Self::new(db.clone(), db.clone(), db, limits)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/data/export", get(data::export_data))
        .route("/api/data/delete", delete(data::delete_data))
        .route("/api/subscriptions/status", get(subscriptions::status))
        .route("/api/entries", get(entries::list).post(entries::create))
        .route("/api/entries/cooldown", get(entries::cooldown))
        .route("/api/progress", get(entries::progress))
        .route("/api/mood/color", get(mood::color_preview))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
