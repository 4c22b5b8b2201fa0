//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod counter_store;

pub use counter_store::{CounterRecord, CounterStorePort, StoreError};
