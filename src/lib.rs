//! Visitor Counter - 访问计数服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Counter Context: 计数值解码与递增
//!
//! 应用层 (application/):
//! - Ports: CounterStorePort
//! - Commands: IncrementVisitorCount
//!
//! 基础设施层 (infrastructure/):
//! - Gateway: 调用信封 + CounterHandler（CORS 预检、错误转换）
//! - HTTP: 本地网关（axum）
//! - Persistence: Sled 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
