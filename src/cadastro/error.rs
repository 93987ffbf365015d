use crate::validate::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadastroError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Positions shift under deletes; callers must re-select.
    #[error("Selection not found: the record list changed")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CadastroError>;
