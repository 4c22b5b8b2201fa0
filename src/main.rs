//! Visitor Counter - 访问计数服务
//!
//! 启动顺序：配置 -> 日志 -> 存储 -> HTTP 服务器

use std::sync::Arc;

use visitor_counter::config::{load_config, print_config, LogConfig};
use visitor_counter::infrastructure::http::{AppState, HttpServer, ServerConfig};
use visitor_counter::infrastructure::persistence::{SledCounterStore, SledStoreConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},visitor_counter={},tower_http=debug",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Visitor Counter");
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.store.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 存储只在启动时打开一次，注入给所有请求复用
    let store_config = SledStoreConfig {
        db_path: config.store.path.clone(),
        table: config.store.table.clone(),
    };
    let store = Arc::new(SledCounterStore::new(&store_config)?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(store.clone());
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    store.flush()?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
