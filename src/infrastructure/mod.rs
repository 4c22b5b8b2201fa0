//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及网关与 HTTP 入口

pub mod gateway;
pub mod http;
pub mod memory;
pub mod persistence;

pub use gateway::CounterHandler;
pub use memory::InMemoryCounterStore;
pub use persistence::sled::SledCounterStore;
