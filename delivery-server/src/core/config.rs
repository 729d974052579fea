use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_FILE | ./pedidos.json | 订单数据文件 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，设置后按天滚动写文件 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DATA_FILE=/data/pedidos.json HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 订单集合 JSON 文件路径
    pub data_file: PathBuf,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./pedidos.json")),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用指定数据文件，其余取默认值
    ///
    /// 常用于测试场景
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./pedidos.json"),
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            request_timeout_ms: 30000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_file_keeps_defaults() {
        let config = Config::with_data_file("/tmp/orders.json");

        assert_eq!(config.data_file, PathBuf::from("/tmp/orders.json"));
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.request_timeout_ms, 30000);
        assert_eq!(config.environment, "development");
    }
}
