use thiserror::Error;

#[derive(Error, Debug)]
pub enum AestheteError {
    #[error("Draft not found: {0}")]
    DraftNotFound(String),

    #[error("You must have at least one draft.")]
    LastDraft,

    #[error("Draft name cannot be empty")]
    EmptyName,

    #[error("Invalid word goal '{0}': must be a positive number")]
    InvalidGoal(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidSetting { key: String, value: String },

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AestheteError>;
