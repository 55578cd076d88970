//! GDPR-style export and erasure of a user's mood history.

pub mod bundle;
pub mod service;

pub use bundle::{ExportBundle, ExportedEntry, ExportedMood, EXPORT_DATA_TYPE, EXPORT_VERSION};
pub use service::{DataLifecycleService, DeletionReceipt, DELETE_CONFIRMATION_PHRASE};
