//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Counter Context: 访问计数

pub mod counter;

// 共享的时间格式化
mod timestamp;

pub use timestamp::format_iso8601;
