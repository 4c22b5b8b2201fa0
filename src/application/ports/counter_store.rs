//! Counter Store Port - 出站端口
//!
//! 定义计数记录持久化的抽象接口
//! 具体实现在 infrastructure 层（Sled / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::counter::{CounterId, DecimalNumber};

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 计数记录（用于持久化）
///
/// 每次写入整体覆盖，不做字段级更新
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRecord {
    pub id: CounterId,
    /// 存储中的十进制计数
    pub count: DecimalNumber,
    /// 写入时间，ISO-8601 UTC
    pub last_updated: String,
    /// 写入时间，Unix 秒
    pub timestamp: i64,
}

/// Counter Store Port
///
/// 单 key 的原子 get/put，get 与 put 之间没有事务保证
#[async_trait]
pub trait CounterStorePort: Send + Sync {
    /// 读取计数记录
    async fn get(&self, id: &CounterId) -> Result<Option<CounterRecord>, StoreError>;

    /// 写入计数记录（整体覆盖）
    async fn put(&self, record: CounterRecord) -> Result<(), StoreError>;
}
