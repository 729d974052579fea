use std::sync::Arc;

use crate::core::Config;
use crate::orders::OrderService;
use crate::store::{JsonFileStore, RecordStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | orders | OrderService | 订单服务 (每次调用都读写存储) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub orders: OrderService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// Opens the JSON data file named by the config, creating an empty one
    /// when it does not exist yet.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let store = JsonFileStore::new(&config.data_file);
        store.ensure_initialized().await?;
        tracing::info!(path = %config.data_file.display(), "Order file ready");

        Ok(Self::with_store(config.clone(), Arc::new(store)))
    }

    /// Build state over an arbitrary store
    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            orders: OrderService::new(store),
        }
    }
}
