//! Product API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/best-sellers", get(handler::best_sellers))
        .route("/{product}/total", get(handler::revenue))
}
