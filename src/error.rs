use crate::domain::id::{ColumnId, ItemId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    UnknownColumn(ColumnId),

    #[error("Item not found: {0}")]
    UnknownItem(ItemId),

    #[error("Title cannot exceed {max} characters (got {actual})")]
    TitleTooLong { max: usize, actual: usize },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
