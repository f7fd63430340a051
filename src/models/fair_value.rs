use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::AssetId;

/// How a fair value is derived for one asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FairValueModel {
    /// `max(floor, slope * ln(days_since_genesis) + intercept)`
    LogRegression { slope: f64, intercept: f64, floor: f64 },
    /// A constant price, independent of time
    Fixed { value: f64 },
}

impl FairValueModel {
    fn validate(&self, asset: AssetId) -> Result<(), AppError> {
        match self {
            FairValueModel::LogRegression { slope, intercept, floor } => {
                if !slope.is_finite() || !intercept.is_finite() {
                    return Err(AppError::Config(format!(
                        "{} regression coefficients must be finite",
                        asset
                    )));
                }
                ensure_positive_price(*floor, &format!("{} regression floor", asset))
            }
            FairValueModel::Fixed { value } => {
                ensure_positive_price(*value, &format!("{} fixed fair value", asset))
            }
        }
    }
}

fn ensure_positive_price(value: f64, what: &str) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Config(format!(
            "{} must be a positive finite price, got {}",
            what, value
        )));
    }
    Ok(())
}

/// Fair-value calibration for every asset the engine models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FairValueConfig {
    /// Day the elapsed-time regression counts from (midnight UTC)
    pub genesis: NaiveDate,
    pub btc: FairValueModel,
    pub eth: FairValueModel,
    /// Used for any asset without its own model
    pub default_value: f64,
}

impl Default for FairValueConfig {
    fn default() -> Self {
        Self {
            genesis: NaiveDate::from_ymd_opt(2009, 1, 3).unwrap_or_default(),
            btc: FairValueModel::LogRegression {
                slope: 48_000.0,
                intercept: -360_000.0,
                floor: 10_000.0,
            },
            eth: FairValueModel::Fixed { value: 2_500.0 },
            default_value: 1_000.0,
        }
    }
}

impl FairValueConfig {
    pub fn model_for(&self, asset: AssetId) -> Option<&FairValueModel> {
        match asset {
            AssetId::Btc => Some(&self.btc),
            AssetId::Eth => Some(&self.eth),
            AssetId::Other => None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.btc.validate(AssetId::Btc)?;
        self.eth.validate(AssetId::Eth)?;
        ensure_positive_price(self.default_value, "default fair value")
    }
}

/// Multiplicative confidence ladder around a fair value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FairValueBands {
    pub upper3: f64,
    pub upper2: f64,
    pub upper1: f64,
    pub fair: f64,
    pub lower1: f64,
    pub lower2: f64,
    pub lower3: f64,
}

impl FairValueBands {
    pub fn from_fair_value(fair: f64) -> Self {
        Self {
            upper3: fair * 10.0,
            upper2: fair * 5.0,
            upper1: fair * 2.5,
            fair,
            lower1: fair * 0.5,
            lower2: fair * 0.25,
            lower3: fair * 0.1,
        }
    }

    /// Which rung of the ladder a price sits on.
    pub fn zone_for(&self, price: f64) -> ValuationZone {
        if !price.is_finite() || price <= 0.0 {
            return ValuationZone::Capitulation;
        }

        if price >= self.upper3 {
            ValuationZone::ExtremeBubble
        } else if price >= self.upper2 {
            ValuationZone::Overheated
        } else if price >= self.upper1 {
            ValuationZone::Elevated
        } else if price >= self.fair {
            ValuationZone::AboveFair
        } else if price >= self.lower1 {
            ValuationZone::BelowFair
        } else if price >= self.lower2 {
            ValuationZone::Undervalued
        } else if price >= self.lower3 {
            ValuationZone::DeepValue
        } else {
            ValuationZone::Capitulation
        }
    }
}

/// Price position relative to the fair-value bands, from richest to cheapest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValuationZone {
    ExtremeBubble,
    Overheated,
    Elevated,
    AboveFair,
    BelowFair,
    Undervalued,
    DeepValue,
    Capitulation,
}
