//! File-based usage log storage.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::UsageStorage;
use crate::error::{Error, Result};
use crate::record::UsageRecord;

/// File-based storage holding the record sequence as a pretty-printed JSON
/// array, rewritten in full on every save.
#[derive(Debug)]
pub struct FileUsageStorage {
    path: PathBuf,
}

impl FileUsageStorage {
    /// Create storage at the specified path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UsageStorage for FileUsageStorage {
    async fn load(&self) -> Result<Vec<UsageRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::storage_io(&self.path, e.to_string())),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| Error::StorageSerialization(e.to_string()))
    }

    async fn save(&self, records: &[UsageRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::storage_io(parent, e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(records)
            .map_err(|e| Error::StorageSerialization(e.to_string()))?;
        tokio::fs::write(&self.path, &content)
            .await
            .map_err(|e| Error::storage_io(&self.path, e.to_string()))?;

        debug!(path = %self.path.display(), records = records.len(), "Usage log written");
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
