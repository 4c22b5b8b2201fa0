//! Memory Layer - 内存实现

mod counter_store;

pub use counter_store::InMemoryCounterStore;
