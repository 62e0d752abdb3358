//! Storage backends for persisting the usage record sequence.
//!
//! Provides the [`UsageStorage`] trait and implementations:
//! - [`FileUsageStorage`] - Pretty-printed JSON file
//! - [`MemoryUsageStorage`] - In-memory (testing)

mod file;
mod memory;

use async_trait::async_trait;

pub use file::FileUsageStorage;
pub use memory::MemoryUsageStorage;

use crate::error::Result;
use crate::record::UsageRecord;

/// Trait for usage log storage backends.
///
/// A backend holds the entire record sequence: `load` returns the full
/// history and `save` replaces it. Appending is the caller's job.
#[async_trait]
pub trait UsageStorage: Send + Sync {
    /// Load the full record sequence. A missing or empty backing store is
    /// not an error and yields an empty sequence.
    async fn load(&self) -> Result<Vec<UsageRecord>>;

    /// Replace the full record sequence.
    async fn save(&self, records: &[UsageRecord]) -> Result<()>;

    /// Name of this storage backend.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Blanket impl for `Arc<T>`.
#[async_trait]
impl<T: UsageStorage + ?Sized> UsageStorage for std::sync::Arc<T> {
    async fn load(&self) -> Result<Vec<UsageRecord>> {
        (**self).load().await
    }
    async fn save(&self, records: &[UsageRecord]) -> Result<()> {
        (**self).save(records).await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Blanket impl for `Box<T>`.
#[async_trait]
impl<T: UsageStorage + ?Sized> UsageStorage for Box<T> {
    async fn load(&self) -> Result<Vec<UsageRecord>> {
        (**self).load().await
    }
    async fn save(&self, records: &[UsageRecord]) -> Result<()> {
        (**self).save(records).await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}
