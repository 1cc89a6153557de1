//! Bearer-token sessions. The server resolves the `Authorization`
//! header through [`SessionStore`] before any protected handler runs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// The account a valid session token belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub email: String,
}

impl SessionUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Token lookup seam. `Ok(None)` means the token is unknown or
/// expired; transport problems surface as errors.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<SessionUser>>;
}
