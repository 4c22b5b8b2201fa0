//! Gateway Layer - 网关调用适配
//!
//! 调用事件/响应信封、CORS 响应与 CounterHandler

pub mod counter_handler;
pub mod event;
pub mod response;

pub use counter_handler::{CounterHandler, GatewayError};
pub use event::{GatewayEvent, GatewayResponse};
