//! Order lifecycle and aggregate queries
//!
//! 每个操作都从存储加载完整集合；写操作在返回前把完整集合写回。
//! No state is kept between calls.

use shared::models::{Order, OrderCollection, OrderCreate, OrderUpdate};
use std::sync::Arc;

use super::error::{OrderError, OrderResult};
use super::ids::allocate_id;
use super::stats::{self, ProductSales};
use crate::store::RecordStore;

/// Order service over a [`RecordStore`]
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn RecordStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> OrderResult<OrderCollection> {
        Ok(self.store.load().await?)
    }

    async fn save(&self, collection: &OrderCollection) -> OrderResult<()> {
        Ok(self.store.save(collection).await?)
    }

    /// Check that the medium can be read
    pub async fn ping(&self) -> OrderResult<()> {
        self.load().await.map(|_| ())
    }

    /// All orders in insertion order
    pub async fn list(&self) -> OrderResult<Vec<Order>> {
        Ok(self.load().await?.orders)
    }

    /// 创建订单 (未送达)
    ///
    /// The id advance and the new order are persisted by a single save.
    pub async fn create(&self, data: OrderCreate) -> OrderResult<Order> {
        let mut collection = self.load().await?;
        let id = allocate_id(&mut collection);
        let order = Order::new(id, data, shared::util::now_utc());

        collection.orders.push(order.clone());
        self.save(&collection).await?;

        tracing::info!(order_id = id, customer = %order.customer, "Order created");
        Ok(order)
    }

    pub async fn get(&self, id: i64) -> OrderResult<Order> {
        self.load()
            .await?
            .find(id)
            .cloned()
            .ok_or(OrderError::NotFound(id))
    }

    /// 全量更新 (空字符串 / 0 视为未提供)
    pub async fn update(&self, id: i64, data: OrderUpdate) -> OrderResult<Order> {
        let mut collection = self.load().await?;
        let order = collection.find_mut(id).ok_or(OrderError::NotFound(id))?;
        order.apply_update(data);
        let updated = order.clone();

        self.save(&collection).await?;

        tracing::info!(order_id = id, delivered = updated.delivered, "Order updated");
        Ok(updated)
    }

    /// 设置送达状态 (双向可切换)
    pub async fn set_delivered(&self, id: i64, delivered: bool) -> OrderResult<Order> {
        let mut collection = self.load().await?;
        let order = collection.find_mut(id).ok_or(OrderError::NotFound(id))?;
        order.delivered = delivered;
        let updated = order.clone();

        self.save(&collection).await?;

        tracing::info!(order_id = id, delivered, "Order delivery flag set");
        Ok(updated)
    }

    /// 删除订单，返回被删除的订单
    pub async fn delete(&self, id: i64) -> OrderResult<Order> {
        let mut collection = self.load().await?;
        let removed = collection.remove(id).ok_or(OrderError::NotFound(id))?;

        self.save(&collection).await?;

        tracing::info!(order_id = id, "Order deleted");
        Ok(removed)
    }

    pub async fn revenue_by_customer(&self, customer: &str) -> OrderResult<f64> {
        let collection = self.load().await?;
        Ok(stats::revenue_by_customer(&collection.orders, customer))
    }

    pub async fn revenue_by_product(&self, product: &str) -> OrderResult<f64> {
        let collection = self.load().await?;
        Ok(stats::revenue_by_product(&collection.orders, product))
    }

    pub async fn best_sellers(&self) -> OrderResult<Vec<ProductSales>> {
        let collection = self.load().await?;
        Ok(stats::best_sellers(&collection.orders))
    }
}
