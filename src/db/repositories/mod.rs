mod mood_entries;
mod subscriptions;
mod users;
