use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    AssetId, CycleProgress, FairValueBands, MarketPhase, RiskLevel, ValuationZone,
};

/// Every derived macro figure for one asset, computed from a single clock reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroSnapshot {
    pub asset: AssetId,
    pub current_price: f64,
    pub fair_value: f64,
    /// Signed ratio `(price - fair) / fair`
    pub deviation: f64,
    pub deviation_score: u8,
    pub cycle: CycleProgress,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub phase: MarketPhase,
    pub bands: FairValueBands,
    pub zone: ValuationZone,
    pub generated_at: DateTime<Utc>,
}
