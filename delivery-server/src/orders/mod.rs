//! 订单模块
//!
//! - [`ids`] - 订单 ID 分配
//! - [`service`] - 订单生命周期操作 (创建、查询、更新、送达、删除)
//! - [`stats`] - 营业额和畅销商品统计

pub mod error;
pub mod ids;
pub mod service;
pub mod stats;

pub use error::{OrderError, OrderResult};
pub use ids::allocate_id;
pub use service::OrderService;
pub use stats::ProductSales;
