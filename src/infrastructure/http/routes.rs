//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping            GET   健康检查
//! - /api/visitor-count   ANY   网关代理：HTTP 请求 -> 调用事件 -> CounterHandler
//! - /invoke              POST  直接调用：请求体为调用事件 JSON，返回响应信封 JSON

use axum::{
    routing::{any, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/invoke", post(handlers::invoke))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/visitor-count", any(handlers::visitor_count))
}
