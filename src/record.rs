//! The usage record data model.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder recorded when the caller supplies no user identity.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// A single logged task invocation.
///
/// Serializes with camelCase keys in declaration order, so the persisted JSON
/// reads `timestamp, userId, username, query, model, provider, taskId`. All
/// fields are plain strings; the log file stays greppable and diffable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// ISO 8601 UTC timestamp with millisecond precision, e.g.
    /// `2026-08-23T14:07:05.123Z`.
    pub timestamp: String,
    /// Identifier of the requesting user, or `"unknown"`.
    pub user_id: String,
    /// Display name of the requesting user, or `"unknown"`.
    pub username: String,
    /// The query text as submitted.
    pub query: String,
    /// Model identifier, e.g. `gpt-4`.
    pub model: String,
    /// Provider identifier, e.g. `openrouter`.
    pub provider: String,
    /// Identifier of the task this invocation belongs to.
    pub task_id: String,
}

impl UsageRecord {
    /// Builds a record stamped with the current time.
    ///
    /// `user_id` and `username` fall back to [`UNKNOWN_IDENTITY`] when `None`
    /// or empty; the remaining fields are taken verbatim.
    pub fn new(
        task_id: &str,
        query: &str,
        provider: &str,
        model: &str,
        user_id: Option<&str>,
        username: Option<&str>,
    ) -> Self {
        Self {
            timestamp: current_timestamp(),
            user_id: or_unknown(user_id),
            username: or_unknown(username),
            query: query.to_string(),
            model: model.to_string(),
            provider: provider.to_string(),
            task_id: task_id.to_string(),
        }
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN_IDENTITY.to_string(),
    }
}

/// Current UTC time as an ISO 8601 string with millisecond precision.
fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


// MARK: - Property-Based Tests
