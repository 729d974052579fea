//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{DeliveryUpdate, Order, OrderCreate, OrderUpdate};

use crate::core::{Result, ServerError, ServerState};

/// 解析路径中的订单 ID
///
/// 非整数 ID 不可能匹配任何订单，统一按未找到处理。
fn parse_id(raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| {
        tracing::debug!(id = raw, "Unparsable order id");
        ServerError::NotFound
    })
}

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Order>>> {
    let orders = state.orders.list().await?;
    Ok(Json(orders))
}

/// GET /orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    let order = state.orders.get(parse_id(&id)?).await?;
    Ok(Json(order))
}

/// POST /orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state.orders.create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/:id - 更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> Result<Json<Order>> {
    let order = state.orders.update(parse_id(&id)?, payload).await?;
    Ok(Json(order))
}

/// PATCH /orders/:id - 设置送达状态
pub async fn set_delivered(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DeliveryUpdate>,
) -> Result<Json<Order>> {
    let order = state
        .orders
        .set_delivered(parse_id(&id)?, payload.delivered)
        .await?;
    Ok(Json(order))
}

/// DELETE /orders/:id - 删除订单，返回被删除的订单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    let order = state.orders.delete(parse_id(&id)?).await?;
    Ok(Json(order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_id("abc"), Err(ServerError::NotFound)));
        assert!(matches!(parse_id("1.5"), Err(ServerError::NotFound)));
    }
}
