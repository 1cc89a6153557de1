use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::investments::InvestmentKind;

/// A registered account. Email doubles as the identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Positions of one asset merged across a user's investments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHolding {
    /// Ticker when the asset has one, otherwise the investment name.
    pub label: String,
    pub kind: InvestmentKind,
    pub quantity: Decimal,
    /// Sum of `quantity * unit_cost` over the merged positions.
    pub cost_basis: Decimal,
    pub currency: String,
    /// How many stored investments were merged into this holding.
    pub positions: usize,
}

/// Admin view of a user and what they hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssets {
    pub user: User,
    pub assets: Vec<AssetHolding>,
}
