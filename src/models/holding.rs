use serde::{Deserialize, Serialize};

use crate::models::AssetId;

/// A quantity of one asset bought at an average cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub asset: AssetId,
    pub quantity: f64,
    pub cost_basis_per_unit: f64,
}

/// Unrealized profit and loss for a holding at a given price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoldingPnl {
    pub cost_basis: f64,
    pub market_value: f64,
    pub unrealized_pnl: f64,
    /// Percent of cost basis; `None` when nothing was paid
    pub unrealized_pnl_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioPnl {
    pub holdings: Vec<HoldingPnl>,
    pub total_cost_basis: f64,
    pub total_market_value: f64,
    pub total_unrealized_pnl: f64,
    pub total_unrealized_pnl_pct: Option<f64>,
}
