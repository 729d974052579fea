//! API 路由模块
//!
//! # 结构
//!
//! - [`orders`] - 订单管理接口
//! - [`customers`] - 客户营业额接口
//! - [`products`] - 商品营业额和畅销排行接口
//! - [`health`] - 健康检查

pub mod customers;
pub mod health;
pub mod orders;
pub mod products;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::StatusCode;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::core::{Result, ServerError};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(orders::router())
        .merge(customers::router())
        .merge(products::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
