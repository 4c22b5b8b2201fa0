//! Sled 存储实现

mod counter_store;

pub use counter_store::{SledCounterStore, SledStoreConfig};
