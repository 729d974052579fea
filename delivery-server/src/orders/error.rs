use thiserror::Error;

use crate::store::StorageError;

/// Order operation errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(i64),

    #[error("Storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

pub type OrderResult<T> = Result<T, OrderError>;
