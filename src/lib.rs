pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use config::MacroConfig;
pub use errors::AppError;
pub use models::{AssetId, CycleProgress, FairValueBands, MacroSnapshot, MarketPhase};
pub use services::macro_engine::MacroEngine;
