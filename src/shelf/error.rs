use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Record not found: {0}")]
    RecordNotFound(u64),

    #[error("Unknown search field '{0}'. Supported fields: title, author, year")]
    InvalidField(String),

    #[error("Invalid status '{0}'. Supported statuses: available, checked-out")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
