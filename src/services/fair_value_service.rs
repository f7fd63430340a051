use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::models::{AssetId, FairValueBands, FairValueConfig, FairValueModel};
use crate::utils::{fractional_days_between, start_of_day};

/// Days elapsed since `genesis`, never less than one so the log stays defined.
pub fn days_since_genesis(genesis: NaiveDate, now: DateTime<Utc>) -> f64 {
    fractional_days_between(start_of_day(genesis), now).max(1.0)
}

/// Model fair value for `asset` at `now`.
///
/// Assets without a model get `config.default_value`.
pub fn fair_value_at(config: &FairValueConfig, asset: AssetId, now: DateTime<Utc>) -> f64 {
    let Some(model) = config.model_for(asset) else {
        warn!("No fair-value model for {}, using default {}", asset, config.default_value);
        return config.default_value;
    };

    let value = match model {
        FairValueModel::LogRegression { slope, intercept, floor } => {
            let days = days_since_genesis(config.genesis, now);
            (slope * days.ln() + intercept).max(*floor)
        }
        FairValueModel::Fixed { value } => *value,
    };

    debug!(asset = %asset, fair_value = value, "fair value estimated");
    value
}

pub fn bands_at(config: &FairValueConfig, asset: AssetId, now: DateTime<Utc>) -> FairValueBands {
    FairValueBands::from_fair_value(fair_value_at(config, asset, now))
}
