//! Delivery Server - 外卖订单管理服务
//!
//! # 架构概述
//!
//! 订单集合 (含 `nextId` 计数器) 保存在单个 JSON 文件中。每个请求都会
//! 读取完整集合，写操作在返回前把完整集合写回，进程内不保留缓存。
//!
//! # 模块结构
//!
//! ```text
//! delivery-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── store/         # 订单集合存储 (JSON 文件 / 内存)
//! ├── orders/        # ID 分配、订单生命周期、统计查询
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod core;
pub mod orders;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use orders::{OrderError, OrderService, ProductSales};
pub use store::{JsonFileStore, MemoryStore, RecordStore, StorageError};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____       ___
   / __ \___  / (_)   _____  _______  __
  / / / / _ \/ / / | / / _ \/ ___/ / / /
 / /_/ /  __/ / /| |/ /  __/ /  / /_/ /
/_____/\___/_/_/ |___/\___/_/   \__, /
                               /____/
    "#
    );
}
