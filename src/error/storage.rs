use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Persistent storage is not available: {0}")]
    Unavailable(String),
    #[error("Failed to read persistent storage: {0}")]
    Read(String),
    #[error("Failed to write persistent storage: {0}")]
    Write(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
