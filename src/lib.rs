//! # usage-log
//!
//! Best-effort JSON usage log for recording assistant task invocations.
//!
//! Appends one record per tracked call to a pretty-printed JSON array at
//! `<documents dir>/Cline/usage_log.json` by default. Recording never fails
//! from the caller's point of view: setup and I/O errors are logged through
//! [`tracing`] and swallowed, and a recorder whose log location could not be
//! established simply skips tracking.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use usage_log::{UsageLogConfig, UsageRecorder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut config = UsageLogConfig::default();
//!     config.apply_env_overrides();
//!
//!     // Build once at the composition root, clone into call sites.
//!     let recorder = UsageRecorder::from_config(&config);
//!
//!     recorder
//!         .track(
//!             "task-42",
//!             "explain borrow checking",
//!             "openrouter",
//!             "gpt-4",
//!             Some("u-1"),
//!             Some("alice"),
//!         )
//!         .await;
//! }
//! ```
//!
//! The storage seam is pluggable: [`FileUsageStorage`] is the production
//! backend, [`MemoryUsageStorage`] keeps records in memory for tests and
//! embedders that want tracking without disk.

pub mod config;
pub mod error;
pub mod record;
pub mod recorder;
pub mod storage;

// Re-exports for ergonomic usage
pub use config::UsageLogConfig;
pub use error::{Error, Result};
pub use record::{UsageRecord, UNKNOWN_IDENTITY};
pub use recorder::UsageRecorder;
pub use storage::{FileUsageStorage, MemoryUsageStorage, UsageStorage};
