//! Bookstore - 图书 CRUD 服务
//!
//! 启动顺序: 配置 → 日志 → 连接池与建表 → HTTP 服务器 → 优雅关闭后释放连接池

use std::sync::Arc;

use bookstore::config::{load_config, print_config};
use bookstore::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bookstore::infrastructure::persistence::sqlite::{
    create_pool, ensure_schema, DatabaseConfig, SqliteBookRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 中的 DATABASE_URL 等变量（文件不存在时忽略）
    dotenvy::dotenv().ok();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.log.filter_directive())
            }),
        )
        .init();

    tracing::info!("Bookstore - 图书 CRUD 服务");
    print_config(&config);

    // 初始化数据库
    let db_config = DatabaseConfig::new(&config.database.url, config.database.max_connections);
    let pool = create_pool(&db_config).await?;
    ensure_schema(&pool).await?;

    // 创建 Repository 适配器并注入应用状态
    let book_repo = Arc::new(SqliteBookRepository::new(pool.clone()));
    let state = AppState::new(book_repo);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时不触发关闭
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
