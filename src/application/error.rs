//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::counter::CounterError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 存储错误
    #[error("{0}")]
    Store(#[from] StoreError),

    /// 存储中的计数值无效
    #[error("Invalid stored counter: {0}")]
    InvalidCounter(#[from] CounterError),
}
