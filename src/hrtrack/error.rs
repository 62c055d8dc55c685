use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrError {
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document data: {0}")]
    Document(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, HrError>;
