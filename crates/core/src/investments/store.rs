use async_trait::async_trait;

use crate::errors::Result;
use crate::investments::model::Investment;

/// Persistence seam for investments, implemented by the storage crate.
#[async_trait]
pub trait InvestmentStore: Send + Sync {
    /// All investments owned by `user_email`, newest first.
    async fn list_for_user(&self, user_email: &str) -> Result<Vec<Investment>>;

    /// Look up a single investment by id, regardless of owner.
    async fn get(&self, id: &str) -> Result<Option<Investment>>;

    async fn insert(&self, investment: Investment) -> Result<Investment>;

    /// Remove an investment. Returns `false` when the id was unknown.
    async fn delete(&self, id: &str) -> Result<bool>;
}
