//! Counter Commands

use crate::domain::counter::{CountValue, CounterId};

/// 访问计数加一命令
#[derive(Debug, Clone, Default)]
pub struct IncrementVisitorCount {
    pub counter_id: CounterId,
}

/// 访问计数加一响应
#[derive(Debug, Clone)]
pub struct IncrementVisitorCountResponse {
    /// 新计数
    pub visitor_count: CountValue,
    /// 已持久化的写入时间（ISO-8601）
    pub last_updated: String,
    /// 已持久化的写入时间（Unix 秒）
    pub timestamp: i64,
}
