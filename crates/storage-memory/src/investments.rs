use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use fortuneok_core::errors::Result;
use fortuneok_core::investments::{Investment, InvestmentStore};

/// Investment storage backed by a process-local map keyed by id.
#[derive(Default)]
pub struct MemoryInvestmentStore {
    rows: RwLock<HashMap<String, Investment>>,
}

impl MemoryInvestmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvestmentStore for MemoryInvestmentStore {
    async fn list_for_user(&self, user_email: &str) -> Result<Vec<Investment>> {
        let rows = self.rows.read().await;
        let mut investments: Vec<Investment> = rows
            .values()
            .filter(|row| row.user_email == user_email)
            .cloned()
            .collect();
        investments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(investments)
    }

    async fn get(&self, id: &str) -> Result<Option<Investment>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn insert(&self, investment: Investment) -> Result<Investment> {
        self.rows
            .write()
            .await
            .insert(investment.id.clone(), investment.clone());
        Ok(investment)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.rows.write().await.remove(id).is_some())
    }
}
