//! HTTP Layer - 本地网关
//!
//! 将 HTTP 请求转换为网关调用事件，并把响应信封原样写回

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
