use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{FairValueConfig, HalvingSchedule, RiskWeights};

/// Calibration for the whole macro pipeline.
///
/// Every section falls back to its shipped defaults when omitted from a
/// config file, so a file only needs to carry what it recalibrates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroConfig {
    #[serde(default)]
    pub halving_schedule: HalvingSchedule,
    #[serde(default)]
    pub fair_value: FairValueConfig,
    #[serde(default)]
    pub risk_weights: RiskWeights,
}

impl MacroConfig {
    /// Load from the JSON file named by `MACRO_CONFIG_PATH`, or use defaults.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("MACRO_CONFIG_PATH") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => {
                info!("MACRO_CONFIG_PATH not set, using built-in calibration");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        info!("Loading macro calibration from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let config: MacroConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.halving_schedule.validate()?;
        self.fair_value.validate()?;
        self.risk_weights.validate()
    }
}
