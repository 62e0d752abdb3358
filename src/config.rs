use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Configuration for the usage log.
///
/// Designed to embed in a host application's config file; every field has a
/// default, so an absent `[usage_log]` section (or an empty one) yields a
/// working configuration. `USAGE_LOG_*` environment variables take precedence
/// over file values when [`apply_env_overrides`](Self::apply_env_overrides)
/// is called.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsageLogConfig {
    /// Master switch: when false, the recorder starts inert and records
    /// nothing.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Base directory override. When unset, the platform documents directory
    /// is resolved at construction time.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_dir: Option<PathBuf>,
    /// Subdirectory beneath the base directory.
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    /// Log file name.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for UsageLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            documents_dir: None,
            app_dir: default_app_dir(),
            file_name: default_file_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_true() -> bool {
    true
}
fn default_app_dir() -> String {
    "Cline".to_string()
}
fn default_file_name() -> String {
    "usage_log.json".to_string()
}

// ---------------------------------------------------------------------------
// Env overrides and path resolution
// ---------------------------------------------------------------------------

impl UsageLogConfig {
    /// Apply environment variable overrides to the configuration.
    ///
    /// Boolean variables accept `1`/`true`/`yes`/`on` (anything else is
    /// false). Empty string variables are ignored, except
    /// `USAGE_LOG_DOCUMENTS_DIR=` which clears the override.
    pub fn apply_env_overrides(&mut self) {
        macro_rules! env_str {
            ($env:expr, $field:expr) => {
                if let Ok(val) = std::env::var($env) {
                    if !val.is_empty() {
                        $field = val;
                    }
                }
            };
        }
        macro_rules! env_bool {
            ($env:expr, $field:expr) => {
                if let Ok(val) = std::env::var($env) {
                    $field = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
                }
            };
        }

        env_bool!("USAGE_LOG_ENABLED", self.enabled);
        if let Ok(val) = std::env::var("USAGE_LOG_DOCUMENTS_DIR") {
            self.documents_dir = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
        env_str!("USAGE_LOG_APP_DIR", self.app_dir);
        env_str!("USAGE_LOG_FILE_NAME", self.file_name);
    }

    /// Directory the log file lives in: the configured base directory (or
    /// the platform documents directory) joined with `app_dir`.
    ///
    /// Pure resolution, no filesystem side effects.
    pub fn log_dir(&self) -> Result<PathBuf> {
        let base = match &self.documents_dir {
            Some(dir) => dir.clone(),
            None => dirs::document_dir().ok_or(Error::DocumentsDirUnavailable)?,
        };
        Ok(base.join(&self.app_dir))
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.log_dir()?.join(&self.file_name))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
