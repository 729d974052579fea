//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::RevenueTotal;

use crate::core::{Result, ServerState};

/// GET /products/:product/total - 商品已送达订单总额
pub async fn revenue(
    State(state): State<ServerState>,
    Path(product): Path<String>,
) -> Result<Json<RevenueTotal>> {
    let total = state.orders.revenue_by_product(&product).await?;
    Ok(Json(RevenueTotal { total }))
}

/// GET /products/best-sellers - 畅销商品排行 ("<商品> - <数量>")
pub async fn best_sellers(State(state): State<ServerState>) -> Result<Json<Vec<String>>> {
    let ranking = state
        .orders
        .best_sellers()
        .await?
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok(Json(ranking))
}
