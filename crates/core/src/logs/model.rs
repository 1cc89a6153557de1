use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a diagnostic entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One diagnostic entry, kept until an administrator deletes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticLog {
    pub id: String,
    pub level: LogLevel,
    pub message: String,
    /// Component that produced the entry, when known.
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DiagnosticLog {
    pub fn new(level: LogLevel, message: impl Into<String>, source: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            level,
            message: message.into(),
            source,
            created_at: Utc::now(),
        }
    }
}
