//! 健康检查路由

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// 数据文件是否可读
    storage: bool,
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.orders.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: order storage unreadable");
            false
        }
    };

    let (code, status) = if storage {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            storage,
        }),
    )
}
