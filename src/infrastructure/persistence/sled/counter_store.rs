//! Sled-based Counter Store Implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sled::{Db, Tree};
use std::path::Path;

use crate::application::ports::{CounterRecord, CounterStorePort, StoreError};
use crate::domain::counter::{CounterId, DecimalNumber};

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
    /// 表名（对应一个 sled tree）
    pub table: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/counter.sled".to_string(),
            table: "visitor-counter".to_string(),
        }
    }
}

/// 持久化条目
///
/// count 以十进制文本保存，与写入时的精度一致
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredItem {
    id: String,
    count: String,
    last_updated: String,
    timestamp: i64,
}

impl From<&CounterRecord> for StoredItem {
    fn from(record: &CounterRecord) -> Self {
        Self {
            id: record.id.to_string(),
            count: record.count.to_string(),
            last_updated: record.last_updated.clone(),
            timestamp: record.timestamp,
        }
    }
}

impl TryFrom<StoredItem> for CounterRecord {
    type Error = StoreError;

    fn try_from(item: StoredItem) -> Result<Self, Self::Error> {
        let id = CounterId::new(item.id).map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let count =
            DecimalNumber::parse(item.count).map_err(|e| StoreError::SerializationError(e.to_string()))?;
        Ok(CounterRecord {
            id,
            count,
            last_updated: item.last_updated,
            timestamp: item.timestamp,
        })
    }
}

/// Sled 计数存储
pub struct SledCounterStore {
    db: Db,
    table: Tree,
}

impl SledCounterStore {
    /// 打开（或创建）存储
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let table = db
            .open_tree(&config.table)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            table = %config.table,
            records = table.len(),
            "SledCounterStore initialized"
        );

        Ok(Self { db, table })
    }

    /// 打开指定路径下的表
    pub fn open<P: AsRef<Path>>(path: P, table: &str) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
            table: table.to_string(),
        };
        Self::new(&config)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CounterStorePort for SledCounterStore {
    async fn get(&self, id: &CounterId) -> Result<Option<CounterRecord>, StoreError> {
        let Some(data) = self
            .table
            .get(id.as_str())
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?
        else {
            tracing::debug!(counter_id = %id, "Counter record absent");
            return Ok(None);
        };

        let item: StoredItem =
            bincode::deserialize(&data).map_err(|e| StoreError::SerializationError(e.to_string()))?;
        tracing::debug!(counter_id = %id, count = %item.count, "Counter record loaded");

        CounterRecord::try_from(item).map(Some)
    }

    async fn put(&self, record: CounterRecord) -> Result<(), StoreError> {
        let item = StoredItem::from(&record);
        let bytes =
            bincode::serialize(&item).map_err(|e| StoreError::SerializationError(e.to_string()))?;

        self.table
            .insert(record.id.as_str(), bytes)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(
            counter_id = %record.id,
            count = %record.count,
            timestamp = record.timestamp,
            "Counter record stored"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(count: &str, timestamp: i64) -> CounterRecord {
        CounterRecord {
            id: CounterId::default(),
            count: DecimalNumber::parse(count).unwrap(),
            last_updated: "2024-05-01T12:30:45.000000".to_string(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_store_put_get() {
        let dir = tempdir().unwrap();
        let store = SledCounterStore::open(dir.path().join("test.sled"), "visitor-counter").unwrap();

        assert!(store.get(&CounterId::default()).await.unwrap().is_none());

        store.put(record("1", 100)).await.unwrap();
        store.put(record("2", 200)).await.unwrap();

        let stored = store.get(&CounterId::default()).await.unwrap().unwrap();
        assert_eq!(stored, record("2", 200));
        assert_eq!(store.table.len(), 1);
    }

    #[tokio::test]
    async fn test_decimal_text_preserved() {
        let dir = tempdir().unwrap();
        let store = SledCounterStore::open(dir.path().join("test.sled"), "visitor-counter").unwrap();

        store.put(record("5.0", 100)).await.unwrap();

        let stored = store.get(&CounterId::default()).await.unwrap().unwrap();
        assert_eq!(stored.count.as_str(), "5.0");
    }

    #[tokio::test]
    async fn test_tables_are_isolated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");
        let store = SledCounterStore::open(&path, "site-a").unwrap();
        store.put(record("3", 100)).await.unwrap();

        let other = SledCounterStore {
            db: store.db.clone(),
            table: store.db.open_tree("site-b").unwrap(),
        };
        assert!(other.get(&CounterId::default()).await.unwrap().is_none());
    }
}
