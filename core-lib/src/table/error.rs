use thiserror::Error;

/// Errors that can occur when loading an instruction-set description
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read instruction table: {0}")]
    Io(#[from] std::io::Error),
    #[error("instruction table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid opcode key {0:?} (expected a hex byte)")]
    InvalidKey(String),
}
