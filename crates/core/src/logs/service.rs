use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Error, Result, ValidationError};
use crate::logs::model::{DiagnosticLog, LogLevel};
use crate::logs::store::LogStore;

/// Diagnostic log operations exposed to the API layer.
#[async_trait]
pub trait LogServiceTrait: Send + Sync {
    async fn list_logs(&self) -> Result<Vec<DiagnosticLog>>;

    /// Persist a new diagnostic entry.
    async fn record(
        &self,
        level: LogLevel,
        message: &str,
        source: Option<&str>,
    ) -> Result<DiagnosticLog>;

    /// Delete one entry by id.
    async fn delete_log(&self, id: &str) -> Result<()>;

    /// Delete a batch of entries, returning how many existed.
    async fn bulk_delete(&self, ids: &[String]) -> Result<usize>;
}

pub struct LogService {
    store: Arc<dyn LogStore>,
}

impl LogService {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LogServiceTrait for LogService {
    async fn list_logs(&self) -> Result<Vec<DiagnosticLog>> {
        self.store.list().await
    }

    async fn record(
        &self,
        level: LogLevel,
        message: &str,
        source: Option<&str>,
    ) -> Result<DiagnosticLog> {
        if message.trim().is_empty() {
            return Err(ValidationError::MissingField("message".to_string()).into());
        }
        let log = DiagnosticLog::new(level, message.trim(), source.map(str::to_string));
        self.store.insert(log).await
    }

    async fn delete_log(&self, id: &str) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(Error::NotFound(format!("Log entry '{id}'")));
        }
        Ok(())
    }

    async fn bulk_delete(&self, ids: &[String]) -> Result<usize> {
        if ids.is_empty() {
            return Err(ValidationError::InvalidInput(
                "No log ids provided".to_string(),
            )
            .into());
        }
        self.store.delete_many(ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockLogStore {
        rows: Arc<Mutex<Vec<DiagnosticLog>>>,
    }

    impl MockLogStore {
        fn with_rows(rows: Vec<DiagnosticLog>) -> Self {
            Self {
                rows: Arc::new(Mutex::new(rows)),
            }
        }

        fn rows(&self) -> Vec<DiagnosticLog> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LogStore for MockLogStore {
        async fn list(&self) -> Result<Vec<DiagnosticLog>> {
            Ok(self.rows())
        }

        async fn insert(&self, log: DiagnosticLog) -> Result<DiagnosticLog> {
            self.rows.lock().unwrap().push(log.clone());
            Ok(log)
        }

        async fn delete(&self, id: &str) -> Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|row| row.id != id);
            Ok(rows.len() < before)
        }

        async fn delete_many(&self, ids: &[String]) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|row| !ids.contains(&row.id));
            Ok(before - rows.len())
        }
    }

    fn entry(id: &str) -> DiagnosticLog {
        DiagnosticLog {
            id: id.to_string(),
            ..DiagnosticLog::new(LogLevel::Info, "entry", None)
        }
    }

    #[tokio::test]
    async fn record_trims_and_persists() {
        let store = MockLogStore::default();
        let service = LogService::new(Arc::new(store.clone()));

        let log = service
            .record(LogLevel::Error, "  upstream timeout  ", Some("quotes"))
            .await
            .unwrap();

        assert_eq!(log.message, "upstream timeout");
        assert_eq!(log.source.as_deref(), Some("quotes"));
        assert_eq!(store.rows(), vec![log]);
    }

    #[tokio::test]
    async fn record_rejects_blank_message() {
        let store = MockLogStore::default();
        let service = LogService::new(Arc::new(store.clone()));

        let err = service.record(LogLevel::Info, "   ", None).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn delete_log_reports_unknown_id() {
        let store = MockLogStore::with_rows(vec![entry("log-1")]);
        let service = LogService::new(Arc::new(store.clone()));

        service.delete_log("log-1").await.unwrap();
        let err = service.delete_log("log-1").await.unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn bulk_delete_counts_only_existing_entries() {
        let store = MockLogStore::with_rows(vec![entry("log-1"), entry("log-2")]);
        let service = LogService::new(Arc::new(store.clone()));

        let deleted = service
            .bulk_delete(&["log-1".to_string(), "missing".to_string()])
            .await
            .unwrap();

        assert_eq!(deleted, 1);
        let remaining: Vec<String> = store.rows().into_iter().map(|row| row.id).collect();
        assert_eq!(remaining, vec!["log-2".to_string()]);
    }

    #[tokio::test]
    async fn bulk_delete_rejects_empty_batch() {
        let service = LogService::new(Arc::new(MockLogStore::default()));

        let err = service.bulk_delete(&[]).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
    }
}
