use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fortuneok_core::errors::Result;
use fortuneok_core::logs::{DiagnosticLog, LogStore};

/// Diagnostic log storage backed by a process-local map keyed by id.
#[derive(Default)]
pub struct MemoryLogStore {
    rows: RwLock<HashMap<String, DiagnosticLog>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn list(&self) -> Result<Vec<DiagnosticLog>> {
        let rows = self.rows.read().await;
        let mut logs: Vec<DiagnosticLog> = rows.values().cloned().collect();
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(logs)
    }

    async fn insert(&self, log: DiagnosticLog) -> Result<DiagnosticLog> {
        self.rows.write().await.insert(log.id.clone(), log.clone());
        Ok(log)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.rows.write().await.remove(id).is_some())
    }

    async fn delete_many(&self, ids: &[String]) -> Result<usize> {
        let mut rows = self.rows.write().await;
        Ok(ids.iter().filter(|id| rows.remove(*id).is_some()).count())
    }
}
