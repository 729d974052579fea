//! Revenue and best-seller aggregation
//!
//! Only delivered orders count. Every function works on a slice freshly
//! loaded by the caller; nothing is cached.

use shared::models::Order;
use std::collections::HashMap;
use std::fmt;

/// Number of delivered orders for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product: String,
    pub count: usize,
}

impl fmt::Display for ProductSales {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.product, self.count)
    }
}

fn delivered(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|o| o.delivered)
}

/// 客户已送达订单总额
pub fn revenue_by_customer(orders: &[Order], customer: &str) -> f64 {
    delivered(orders)
        .filter(|o| o.customer == customer)
        .map(|o| o.amount)
        .sum()
}

/// 商品已送达订单总额
pub fn revenue_by_product(orders: &[Order], product: &str) -> f64 {
    delivered(orders)
        .filter(|o| o.product == product)
        .map(|o| o.amount)
        .sum()
}

/// 畅销商品排行
///
/// Sorted by descending count. Equal counts keep the order in which each
/// product first appears among delivered orders.
pub fn best_sellers(orders: &[Order]) -> Vec<ProductSales> {
    let mut ranking: Vec<ProductSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for order in delivered(orders) {
        match index.get(order.product.as_str()) {
            Some(&i) => ranking[i].count += 1,
            None => {
                index.insert(order.product.as_str(), ranking.len());
                ranking.push(ProductSales {
                    product: order.product.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: ties stay first-seen
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}
