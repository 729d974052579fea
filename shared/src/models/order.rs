//! Order Model
//!
//! 持久化字段名沿用数据文件的标签 (`cliente`, `produto`, `valor`, `entregue`,
//! `timestamp`)，反序列化时同时接受英文别名。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "cliente", alias = "customer")]
    pub customer: String,
    #[serde(rename = "produto", alias = "product")]
    pub product: String,
    /// Monetary value, only counted in revenue once delivered
    #[serde(rename = "valor", alias = "amount")]
    pub amount: f64,
    #[serde(rename = "entregue", alias = "delivered", default)]
    pub delivered: bool,
    #[serde(rename = "timestamp", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order from a create payload
    pub fn new(id: i64, data: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer: data.customer,
            product: data.product,
            amount: data.amount,
            delivered: false,
            created_at,
        }
    }

    /// 按 "有值才替换" 策略合并更新
    ///
    /// - `customer` / `product`: 空字符串视为未提供
    /// - `amount`: 0 视为未提供
    /// - `delivered`: 只要提供就覆盖 (包括 `false`)
    ///
    /// 调用方无法通过此接口把字符串清空或把金额改为 0。
    pub fn apply_update(&mut self, data: OrderUpdate) {
        if let Some(customer) = data.customer.filter(|c| !c.is_empty()) {
            self.customer = customer;
        }
        if let Some(product) = data.product.filter(|p| !p.is_empty()) {
            self.product = product;
        }
        if let Some(amount) = data.amount.filter(|a| *a != 0.0) {
            self.amount = amount;
        }
        if let Some(delivered) = data.delivered {
            self.delivered = delivered;
        }
    }
}

/// Persisted aggregate root: every order plus the id counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCollection {
    #[serde(rename = "nextId")]
    pub next_id: i64,
    #[serde(rename = "pedidos", alias = "orders", default)]
    pub orders: Vec<Order>,
}

impl OrderCollection {
    pub fn find(&self, id: i64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn find_mut(&mut self, id: i64) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    /// Remove and return the order with `id`, keeping the rest in order
    pub fn remove(&mut self, id: i64) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(index))
    }

    /// Highest id currently stored
    pub fn max_id(&self) -> Option<i64> {
        self.orders.iter().map(|o| o.id).max()
    }
}

impl Default for OrderCollection {
    fn default() -> Self {
        Self {
            next_id: 1,
            orders: Vec::new(),
        }
    }
}

/// Create order payload
///
/// 缺失字段取空字符串 / 0，创建不做额外校验。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(alias = "cliente", default)]
    pub customer: String,
    #[serde(alias = "produto", default)]
    pub product: String,
    #[serde(alias = "valor", default)]
    pub amount: f64,
}

/// Update order payload (PUT)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(alias = "cliente")]
    pub customer: Option<String>,
    #[serde(alias = "produto")]
    pub product: Option<String>,
    #[serde(alias = "valor")]
    pub amount: Option<f64>,
    #[serde(alias = "entregue")]
    pub delivered: Option<bool>,
}

/// Delivery flag payload (PATCH)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryUpdate {
    #[serde(alias = "entregue")]
    pub delivered: bool,
}

/// Revenue aggregate response: `{"total": n}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueTotal {
    pub total: f64,
}
