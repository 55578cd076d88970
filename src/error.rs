use thiserror::Error;

/// Failures surfaced by the entry and data-lifecycle services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("authentication required")]
    Unauthorized,

    #[error("confirmation phrase does not match")]
    InvalidConfirmation,

    #[error("invalid mood entry: {0}")]
    InvalidEntry(String),

    #[error("too many entries recently; try again in {minutes_until_next} minute(s)")]
    CoolingDown { minutes_until_next: u32 },

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
