use async_trait::async_trait;

use crate::errors::Result;
use crate::users::model::User;

/// Persistence seam for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn list(&self) -> Result<Vec<User>>;
}
