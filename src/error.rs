use thiserror::Error;

use crate::models::ApplicationStatus;

#[derive(Error, Debug)]
pub enum KazikeError {
    #[error("Already applied to job {0}")]
    DuplicateApplication(String),

    #[error("Job {0} not found")]
    JobNotFound(String),

    #[error("Application {0} not found")]
    ApplicationNotFound(String),

    #[error("No candidate profile. Run 'kazike profile init' first.")]
    ProfileMissing,

    #[error("Cannot move application from {from} to {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("Database not initialized. Run 'kazike init' first.")]
    NotInitialized,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Storage Error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KazikeError>;
