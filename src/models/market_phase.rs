use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Macro market phase derived from risk score and cycle progress
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MarketPhase {
    Accumulation,
    Expansion,
    Euphoria,
    Recession,
}

impl MarketPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPhase::Accumulation => "accumulation",
            MarketPhase::Expansion => "expansion",
            MarketPhase::Euphoria => "euphoria",
            MarketPhase::Recession => "recession",
        }
    }

    /// Parse a phase label; unknown labels are not a phase.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "accumulation" => Some(MarketPhase::Accumulation),
            "expansion" => Some(MarketPhase::Expansion),
            "euphoria" => Some(MarketPhase::Euphoria),
            "recession" => Some(MarketPhase::Recession),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MarketPhase::Accumulation => "Accumulation: price near or below fair value early in the cycle",
            MarketPhase::Expansion => "Expansion: trend recovering with moderate risk mid-cycle",
            MarketPhase::Euphoria => "Euphoria: price stretched well above fair value",
            MarketPhase::Recession => "Recession: late cycle with fading momentum",
        }
    }

    pub fn suggested_stance(&self) -> &'static str {
        match self {
            MarketPhase::Accumulation => "Build positions gradually",
            MarketPhase::Expansion => "Hold core positions and rebalance on strength",
            MarketPhase::Euphoria => "Take profits and reduce exposure",
            MarketPhase::Recession => "Preserve capital and wait for accumulation signals",
        }
    }
}

impl std::fmt::Display for MarketPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse label for a 0-100 risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            RiskLevel::Low
        } else if score < 70 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

/// Weights blending deviation and cycle position into a risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskWeights {
    pub deviation: f64,
    pub cycle: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            deviation: 0.6,
            cycle: 0.4,
        }
    }
}

impl RiskWeights {
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, weight) in [("deviation", self.deviation), ("cycle", self.cycle)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::Config(format!(
                    "{} weight must be a non-negative finite number, got {}",
                    name, weight
                )));
            }
        }
        Ok(())
    }
}
