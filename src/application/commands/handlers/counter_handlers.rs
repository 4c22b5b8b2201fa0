//! Counter Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{IncrementVisitorCount, IncrementVisitorCountResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{CounterRecord, CounterStorePort};
use crate::domain::counter::{CountValue, DecimalNumber, VisitorCounter};
use crate::domain::format_iso8601;

/// IncrementVisitorCount Handler
///
/// 读取 -> 加一 -> 整体覆盖写入。
/// 读写之间没有 compare-and-swap，并发调用可能丢失更新。
pub struct IncrementVisitorCountHandler {
    store: Arc<dyn CounterStorePort>,
}

impl IncrementVisitorCountHandler {
    pub fn new(store: Arc<dyn CounterStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: IncrementVisitorCount,
    ) -> Result<IncrementVisitorCountResponse, ApplicationError> {
        let counter_id = command.counter_id;

        let mut counter = match self.store.get(&counter_id).await? {
            Some(record) => VisitorCounter::restore(counter_id, &record.count)?,
            None => VisitorCounter::fresh(counter_id),
        };

        let new_count = counter.increment()?;

        let now = Utc::now();
        let record = CounterRecord {
            id: counter.id().clone(),
            count: DecimalNumber::from(new_count),
            last_updated: format_iso8601(&now),
            timestamp: now.timestamp(),
        };
        // 输出值按写入的十进制数解码
        let visitor_count = CountValue::from_decimal(&record.count)?;
        let last_updated = record.last_updated.clone();
        let timestamp = record.timestamp;

        self.store.put(record).await?;

        tracing::info!(
            counter_id = %counter.id(),
            visitor_count = %visitor_count,
            "Visitor count incremented"
        );

        Ok(IncrementVisitorCountResponse {
            visitor_count,
            last_updated,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::StoreError;
    use crate::domain::counter::CounterId;
    use crate::infrastructure::memory::InMemoryCounterStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 读取总是失败的存储，记录写入次数
    #[derive(Default)]
    struct UnavailableStore {
        puts: AtomicUsize,
    }

    #[async_trait]
    impl CounterStorePort for UnavailableStore {
        async fn get(&self, _id: &CounterId) -> Result<Option<CounterRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn put(&self, _record: CounterRecord) -> Result<(), StoreError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_first_increment_on_empty_store() {
        let store = Arc::new(InMemoryCounterStore::new());
        let handler = IncrementVisitorCountHandler::new(store.clone());

        let response = handler.handle(IncrementVisitorCount::default()).await.unwrap();
        assert_eq!(response.visitor_count, CountValue::Integer(1));

        let record = store.get(&CounterId::default()).await.unwrap().unwrap();
        assert_eq!(record.count.as_str(), "1");
        assert_eq!(record.last_updated, response.last_updated);
        assert_eq!(record.timestamp, response.timestamp);
    }

    #[tokio::test]
    async fn test_sequential_increments() {
        let store = Arc::new(InMemoryCounterStore::new());
        let handler = IncrementVisitorCountHandler::new(store);

        for k in 1..=5 {
            let response = handler.handle(IncrementVisitorCount::default()).await.unwrap();
            assert_eq!(response.visitor_count, CountValue::Integer(k));
        }
    }

    async fn seeded_store(count: &str) -> Arc<InMemoryCounterStore> {
        let store = Arc::new(InMemoryCounterStore::new());
        store
            .put(CounterRecord {
                id: CounterId::default(),
                count: DecimalNumber::parse(count).unwrap(),
                last_updated: "2024-01-01T00:00:00".to_string(),
                timestamp: 1_704_067_200,
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_fractional_stored_count_truncates() {
        let store = seeded_store("5.5").await;
        let handler = IncrementVisitorCountHandler::new(store.clone());

        let response = handler.handle(IncrementVisitorCount::default()).await.unwrap();
        assert_eq!(response.visitor_count, CountValue::Integer(6));

        let record = store.get(&CounterId::default()).await.unwrap().unwrap();
        assert_eq!(record.count.as_str(), "6");
    }

    #[tokio::test]
    async fn test_count_beyond_integer_range_is_not_written() {
        let store = seeded_store("12345678901234567890").await;
        let handler = IncrementVisitorCountHandler::new(store.clone());

        let result = handler.handle(IncrementVisitorCount::default()).await;
        assert!(matches!(result, Err(ApplicationError::InvalidCounter(_))));

        let record = store.get(&CounterId::default()).await.unwrap().unwrap();
        assert_eq!(record.count.as_str(), "12345678901234567890");
    }

    #[tokio::test]
    async fn test_read_failure_skips_write() {
        let store = Arc::new(UnavailableStore::default());
        let handler = IncrementVisitorCountHandler::new(store.clone());

        let result = handler.handle(IncrementVisitorCount::default()).await;
        assert!(matches!(result, Err(ApplicationError::Store(_))));
        assert_eq!(store.puts.load(Ordering::SeqCst), 0);
    }
}
