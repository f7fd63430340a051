use tracing::debug;

use crate::models::{Holding, HoldingPnl, PortfolioPnl};

fn pct_of(gain: f64, basis: f64) -> Option<f64> {
    if basis == 0.0 || !basis.is_finite() {
        None
    } else {
        Some(gain / basis.abs() * 100.0)
    }
}

/// Unrealized P&L of a holding marked at `price`.
pub fn holding_pnl(holding: &Holding, price: f64) -> HoldingPnl {
    let cost_basis = holding.quantity * holding.cost_basis_per_unit;
    let market_value = holding.quantity * price;
    let unrealized_pnl = market_value - cost_basis;

    HoldingPnl {
        cost_basis,
        market_value,
        unrealized_pnl,
        unrealized_pnl_pct: pct_of(unrealized_pnl, cost_basis),
    }
}

/// Aggregate P&L over `(holding, current price)` pairs.
pub fn portfolio_pnl(positions: &[(Holding, f64)]) -> PortfolioPnl {
    let holdings: Vec<HoldingPnl> = positions
        .iter()
        .map(|(holding, price)| holding_pnl(holding, *price))
        .collect();

    let (total_cost_basis, total_market_value) = holdings
        .iter()
        .fold((0.0, 0.0), |(cost, value), h| (cost + h.cost_basis, value + h.market_value));
    let total_unrealized_pnl = total_market_value - total_cost_basis;

    debug!(
        positions = holdings.len(),
        total_market_value, total_unrealized_pnl, "portfolio P&L computed"
    );

    PortfolioPnl {
        holdings,
        total_cost_basis,
        total_market_value,
        total_unrealized_pnl,
        total_unrealized_pnl_pct: pct_of(total_unrealized_pnl, total_cost_basis),
    }
}
