//! The usage recorder: best-effort appends to the usage log.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::UsageLogConfig;
use crate::error::{Error, Result};
use crate::record::UsageRecord;
use crate::storage::{FileUsageStorage, UsageStorage};

/// Records task usage to a local JSON log.
///
/// Construct one at the application's composition root and clone it wherever
/// tracking happens; clones share the backing storage and the write gate.
///
/// Recording is strictly best-effort: [`track`](Self::track) never returns an
/// error and never panics. When construction fails (no documents directory,
/// log directory not creatable) the recorder is permanently inert and every
/// `track` call degrades to a logged warning.
#[derive(Clone)]
pub struct UsageRecorder {
    inner: Arc<RecorderInner>,
}

struct RecorderInner {
    /// `None` marks the inert recorder.
    storage: Option<Box<dyn UsageStorage>>,
    /// Serializes the read-append-write cycle so overlapping track calls on
    /// one recorder cannot drop each other's records.
    write_gate: Mutex<()>,
}

impl UsageRecorder {
    /// Build a recorder from configuration.
    ///
    /// Resolves the log path, ensures the log directory exists, and logs the
    /// resolved location. Never fails: on any setup error the recorder comes
    /// up inert instead.
    pub fn from_config(config: &UsageLogConfig) -> Self {
        if !config.enabled {
            debug!("Usage logging disabled by configuration");
            return Self::disabled();
        }
        match Self::open_log(config) {
            Ok(storage) => {
                info!(path = %storage.path().display(), "Usage log initialized");
                Self::with_storage(storage)
            }
            Err(err) => {
                error!(error = %err, "Failed to initialize usage log, tracking is disabled");
                Self::disabled()
            }
        }
    }

    /// Build an active recorder over an explicit storage backend.
    pub fn with_storage<S: UsageStorage + 'static>(storage: S) -> Self {
        Self {
            inner: Arc::new(RecorderInner {
                storage: Some(Box::new(storage)),
                write_gate: Mutex::new(()),
            }),
        }
    }

    /// Build an inert recorder that records nothing.
    pub fn disabled() -> Self {
        Self {
            inner: Arc::new(RecorderInner {
                storage: None,
                write_gate: Mutex::new(()),
            }),
        }
    }

    /// Whether this recorder has a storage backend to write to.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.storage.is_some()
    }

    /// Append one usage record to the log.
    ///
    /// All failures are logged and swallowed; the caller's flow is never
    /// interrupted. On an unreadable or corrupt log the prior content is
    /// discarded and a fresh record list is written.
    pub async fn track(
        &self,
        task_id: &str,
        query: &str,
        provider: &str,
        model: &str,
        user_id: Option<&str>,
        username: Option<&str>,
    ) {
        let Some(storage) = self.inner.storage.as_ref() else {
            warn!("Usage log not initialized, skipping tracking");
            return;
        };

        let record = UsageRecord::new(task_id, query, provider, model, user_id, username);
        debug!(
            task_id = %record.task_id,
            provider = %record.provider,
            model = %record.model,
            "Tracking usage"
        );

        let _gate = self.inner.write_gate.lock().await;

        let mut records = match storage.load().await {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Could not read existing usage log, starting fresh");
                Vec::new()
            }
        };
        records.push(record);

        if let Err(err) = storage.save(&records).await {
            error!(error = %err, "Failed to write usage log");
        }
    }

    fn open_log(config: &UsageLogConfig) -> Result<FileUsageStorage> {
        let path = config.log_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| Error::create_dir(dir, e.to_string()))?;
        }
        Ok(FileUsageStorage::new(path))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
