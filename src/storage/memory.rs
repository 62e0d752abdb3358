//! In-memory usage log storage for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UsageStorage;
use crate::error::Result;
use crate::record::UsageRecord;

/// In-memory usage log storage, primarily for testing.
#[derive(Debug)]
pub struct MemoryUsageStorage {
    records: RwLock<Vec<UsageRecord>>,
}

impl MemoryUsageStorage {
    /// Create a new empty in-memory storage.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryUsageStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsageStorage for MemoryUsageStorage {
    async fn load(&self) -> Result<Vec<UsageRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[UsageRecord]) -> Result<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryUsageStorage::new();

        assert!(storage.load().await.unwrap().is_empty());

        let record = UsageRecord::new("t1", "q", "openrouter", "gpt-4", None, None);
        storage.save(std::slice::from_ref(&record)).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), vec![record.clone()]);

        // Save replaces, not appends.
        storage.save(&[]).await.unwrap();
        assert!(storage.load().await.unwrap().is_empty());
    }
}
