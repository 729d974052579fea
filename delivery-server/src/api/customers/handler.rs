//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::RevenueTotal;

use crate::core::{Result, ServerState};

/// GET /customers/:customer/total - 客户已送达订单总额
pub async fn revenue(
    State(state): State<ServerState>,
    Path(customer): Path<String>,
) -> Result<Json<RevenueTotal>> {
    let total = state.orders.revenue_by_customer(&customer).await?;
    Ok(Json(RevenueTotal { total }))
}
