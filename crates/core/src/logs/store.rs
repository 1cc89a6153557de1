use async_trait::async_trait;

use crate::errors::Result;
use crate::logs::model::DiagnosticLog;

/// Persistence seam for diagnostic logs.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<DiagnosticLog>>;

    async fn insert(&self, log: DiagnosticLog) -> Result<DiagnosticLog>;

    /// Remove one entry. Returns `false` when the id was unknown.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Remove every entry whose id appears in `ids`, returning how
    /// many were actually removed. Unknown ids are skipped silently.
    async fn delete_many(&self, ids: &[String]) -> Result<usize>;
}
