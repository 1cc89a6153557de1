use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use fortuneok_core::errors::Result;
use fortuneok_core::sessions::{SessionStore, SessionUser};

/// Session storage backed by a process-local token map.
#[derive(Default)]
pub struct MemorySessionStore {
    tokens: RwLock<HashMap<String, SessionUser>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a bearer token to a user. Meant for startup seeding and
    /// tests.
    pub async fn seed_token(&self, token: &str, email: &str) {
        debug!("Seeding session token for {email}");
        self.tokens
            .write()
            .await
            .insert(token.to_string(), SessionUser::new(email));
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn resolve(&self, token: &str) -> Result<Option<SessionUser>> {
        Ok(self.tokens.read().await.get(token).cloned())
    }
}
