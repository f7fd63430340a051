pub mod cycle_service;
pub mod fair_value_service;
pub mod indicators;
pub mod macro_engine;
pub mod pnl_service;
pub mod risk_service;
