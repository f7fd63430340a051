mod asset;
mod cycle;
mod fair_value;
mod holding;
mod market_phase;
mod snapshot;

pub use asset::AssetId;
pub use cycle::{CycleProgress, EpochBoundary, HalvingSchedule};
pub use fair_value::{FairValueBands, FairValueConfig, FairValueModel, ValuationZone};
pub use holding::{Holding, HoldingPnl, PortfolioPnl};
pub use market_phase::{MarketPhase, RiskLevel, RiskWeights};
pub use snapshot::MacroSnapshot;
