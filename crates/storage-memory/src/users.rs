use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;

use fortuneok_core::errors::Result;
use fortuneok_core::users::{User, UserStore};

/// User storage backed by a process-local map keyed by email.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account, replacing any existing one with the same
    /// email. Meant for startup seeding and tests.
    pub async fn seed_user(&self, email: &str, display_name: &str) {
        debug!("Seeding user {email}");
        let user = User {
            email: email.to_string(),
            display_name: display_name.to_string(),
            created_at: Utc::now(),
        };
        self.rows.write().await.insert(user.email.clone(), user);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.rows.read().await.get(email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>> {
        let rows = self.rows.read().await;
        let mut users: Vec<User> = rows.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }
}
