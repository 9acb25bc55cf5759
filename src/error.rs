use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeboardError {
    #[error("Unknown health field: {0} (expected 'weight' or 'sleep')")]
    UnknownHealthField(String),

    #[error("Unknown transaction kind: {0} (expected 'income' or 'expense')")]
    UnknownTxKind(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeboardError>;
