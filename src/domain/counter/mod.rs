//! Counter Context - 访问计数限界上下文
//!
//! 职责:
//! - 计数值的解码与递增
//! - 单例计数记录的标识

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::VisitorCounter;
pub use errors::CounterError;
pub use value_objects::{CountValue, CounterId, DecimalNumber};
