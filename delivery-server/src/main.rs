use delivery_server::{Config, Server, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 初始化日志
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(
        environment = %config.environment,
        data_file = %config.data_file.display(),
        "🚚 Delivery server starting..."
    );

    // 3. 启动 HTTP 服务器 (会自动初始化数据文件)
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
