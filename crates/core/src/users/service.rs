use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::investments::{Investment, InvestmentKind, InvestmentStore};
use crate::users::model::{AssetHolding, User, UserAssets};
use crate::users::store::UserStore;

/// User operations exposed to administrators.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    /// The user plus their investments merged per asset.
    async fn get_user_assets(&self, email: &str) -> Result<UserAssets>;
}

pub struct UserService {
    users: Arc<dyn UserStore>,
    investments: Arc<dyn InvestmentStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, investments: Arc<dyn InvestmentStore>) -> Self {
        Self { users, investments }
    }

    /// Merge investments that refer to the same asset. Keyed by label,
    /// kind, and currency so a EUR and a USD position of the same name
    /// stay separate. The map keeps the output ordered by label.
    fn merge_holdings(investments: Vec<Investment>) -> Vec<AssetHolding> {
        let mut merged: BTreeMap<(String, InvestmentKind, String), AssetHolding> =
            BTreeMap::new();
        for investment in investments {
            let label = investment
                .symbol
                .clone()
                .unwrap_or_else(|| investment.name.clone());
            let key = (label.clone(), investment.kind, investment.currency.clone());
            let cost = investment.quantity * investment.unit_cost;
            merged
                .entry(key)
                .and_modify(|holding| {
                    holding.quantity += investment.quantity;
                    holding.cost_basis += cost;
                    holding.positions += 1;
                })
                .or_insert(AssetHolding {
                    label,
                    kind: investment.kind,
                    quantity: investment.quantity,
                    cost_basis: cost,
                    currency: investment.currency,
                    positions: 1,
                });
        }
        merged.into_values().collect()
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.users.list().await
    }

    async fn get_user_assets(&self, email: &str) -> Result<UserAssets> {
        let user = self
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| Error::NotFound(format!("User '{email}'")))?;
        let investments = self.investments.list_for_user(&user.email).await?;
        Ok(UserAssets {
            user,
            assets: Self::merge_holdings(investments),
        })
    }
}
