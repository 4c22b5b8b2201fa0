//! In-Memory Counter Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{CounterRecord, CounterStorePort, StoreError};
use crate::domain::counter::CounterId;

/// 内存计数存储
///
/// 进程内有效，用于测试和临时运行
pub struct InMemoryCounterStore {
    records: DashMap<CounterId, CounterRecord>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

impl Default for InMemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStorePort for InMemoryCounterStore {
    async fn get(&self, id: &CounterId) -> Result<Option<CounterRecord>, StoreError> {
        Ok(self.records.get(id).map(|r| r.clone()))
    }

    async fn put(&self, record: CounterRecord) -> Result<(), StoreError> {
        tracing::debug!(counter_id = %record.id, count = %record.count, "Counter record stored");
        self.records.insert(record.id.clone(), record);
        Ok(())
    }
}
