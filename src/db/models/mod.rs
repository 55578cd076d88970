pub mod mood_entry;
pub mod subscription;
pub mod user;

pub use mood_entry::{MoodEntry, NewMoodEntry, SentimentScores};
pub use subscription::SubscriptionStatus;
pub use user::User;
