pub mod service;

pub use service::{CreatedEntry, EntryService, EntryView, Progress};
