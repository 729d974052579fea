use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::orders::OrderError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("not found")]
    NotFound,

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ServerError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            ServerError::StorageUnavailable(msg) => {
                // 记录存储错误但不暴露详细信息
                tracing::error!(target: "storage", error = %msg, "Order storage unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable")
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<OrderError> for ServerError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => {
                tracing::debug!(order_id = id, "Order not found");
                ServerError::NotFound
            }
            OrderError::Storage(e) => ServerError::StorageUnavailable(e.to_string()),
        }
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StorageError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::StorageUnavailable("disk".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_order_error_conversion() {
        let err: ServerError = OrderError::NotFound(3).into();
        assert!(matches!(err, ServerError::NotFound));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ServerError = OrderError::Storage(StorageError::Serialization(json_err)).into();
        assert!(matches!(err, ServerError::StorageUnavailable(_)));
    }
}
