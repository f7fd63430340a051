use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::MacroConfig;
use crate::errors::AppError;
use crate::models::{
    AssetId, CycleProgress, FairValueBands, MacroSnapshot, MarketPhase, RiskLevel,
};
use crate::services::{cycle_service, fair_value_service, indicators, risk_service};

/// Entry point for the macro risk and cycle pipeline.
///
/// Holds a validated calibration; every operation is a pure function of that
/// calibration, its arguments and the clock. Methods ending in `_at` take the
/// clock reading explicitly, the others read `Utc::now()`.
#[derive(Debug, Clone, Default)]
pub struct MacroEngine {
    config: MacroConfig,
}

impl MacroEngine {
    pub fn new(config: MacroConfig) -> Result<Self, AppError> {
        config.validate()?;
        info!(
            boundaries = config.halving_schedule.boundaries.len(),
            "Macro engine initialized"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &MacroConfig {
        &self.config
    }

    pub fn fair_value(&self, asset: AssetId) -> f64 {
        self.fair_value_at(asset, Utc::now())
    }

    pub fn fair_value_at(&self, asset: AssetId, now: DateTime<Utc>) -> f64 {
        fair_value_service::fair_value_at(&self.config.fair_value, asset, now)
    }

    pub fn bands(&self, asset: AssetId) -> FairValueBands {
        self.bands_at(asset, Utc::now())
    }

    pub fn bands_at(&self, asset: AssetId, now: DateTime<Utc>) -> FairValueBands {
        fair_value_service::bands_at(&self.config.fair_value, asset, now)
    }

    pub fn cycle_progress(&self) -> CycleProgress {
        self.cycle_progress_at(Utc::now())
    }

    pub fn cycle_progress_at(&self, now: DateTime<Utc>) -> CycleProgress {
        cycle_service::cycle_progress_at(&self.config.halving_schedule, now)
    }

    /// 0-100 blend of price deviation from fair value and cycle position.
    pub fn risk_score(&self, asset: AssetId, current_price: f64) -> u8 {
        self.risk_score_at(asset, current_price, Utc::now())
    }

    pub fn risk_score_at(&self, asset: AssetId, current_price: f64, now: DateTime<Utc>) -> u8 {
        let fair_value = self.fair_value_at(asset, now);
        let deviation_score =
            risk_service::deviation_score(risk_service::deviation(current_price, fair_value));
        let cycle = self.cycle_progress_at(now);

        risk_service::blend_risk_score(
            deviation_score,
            cycle.percent_complete,
            &self.config.risk_weights,
        )
    }

    pub fn phase(&self, risk_score: u8, cycle_percent: u8) -> MarketPhase {
        risk_service::phase(risk_score, cycle_percent)
    }

    pub fn moving_average(&self, series: &[f64], period: usize) -> Vec<Option<f64>> {
        indicators::moving_average(series, period)
    }

    pub fn exponential_moving_average(&self, series: &[f64], period: usize) -> Vec<f64> {
        indicators::exponential_moving_average(series, period)
    }

    /// Latest price over its trailing simple MA, e.g. the 200-week multiple.
    pub fn moving_average_multiple(&self, series: &[f64], period: usize) -> Option<f64> {
        indicators::moving_average_multiple(series, period)
    }

    pub fn snapshot(&self, asset: AssetId, current_price: f64) -> MacroSnapshot {
        self.snapshot_at(asset, current_price, Utc::now())
    }

    /// All derived figures for `asset` from one clock reading.
    pub fn snapshot_at(
        &self,
        asset: AssetId,
        current_price: f64,
        now: DateTime<Utc>,
    ) -> MacroSnapshot {
        let bands = self.bands_at(asset, now);
        let deviation = risk_service::deviation(current_price, bands.fair);
        let deviation_score = risk_service::deviation_score(deviation);
        let cycle = self.cycle_progress_at(now);
        let risk_score = risk_service::blend_risk_score(
            deviation_score,
            cycle.percent_complete,
            &self.config.risk_weights,
        );
        let phase = risk_service::phase(risk_score, cycle.percent_complete);

        info!(
            asset = %asset,
            price = current_price,
            risk_score,
            phase = %phase,
            "Macro snapshot computed"
        );

        MacroSnapshot {
            asset,
            current_price,
            fair_value: bands.fair,
            deviation,
            deviation_score,
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            phase,
            zone: bands.zone_for(current_price),
            bands,
            cycle,
            generated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 19, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = MacroConfig::default();
        config.halving_schedule.boundaries.truncate(1);
        assert!(matches!(MacroEngine::new(config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_risk_score_at_fair_value_mid_cycle() {
        let engine = MacroEngine::default();
        let fair = engine.fair_value_at(AssetId::Btc, now());
        // deviation score 50, cycle 50
        assert_eq!(engine.risk_score_at(AssetId::Btc, fair, now()), 50);
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let engine = MacroEngine::default();
        let snapshot = engine.snapshot_at(AssetId::Eth, 5_000.0, now());

        assert_eq!(snapshot.fair_value, 2_500.0);
        assert_eq!(snapshot.deviation, 1.0);
        assert_eq!(snapshot.deviation_score, 100);
        assert_eq!(snapshot.cycle.percent_complete, 50);
        // 0.6 * 100 + 0.4 * 50
        assert_eq!(snapshot.risk_score, 80);
        assert_eq!(snapshot.risk_level, RiskLevel::High);
        assert_eq!(snapshot.phase, MarketPhase::Euphoria);
        assert_eq!(snapshot.bands.fair, snapshot.fair_value);
        assert_eq!(
            snapshot.risk_score,
            engine.risk_score_at(AssetId::Eth, 5_000.0, now())
        );
        assert_eq!(snapshot.generated_at, now());
    }

    #[test]
    fn test_moving_average_multiple_through_engine() {
        let engine = MacroEngine::default();
        let weekly = [100.0, 100.0, 100.0, 200.0];
        assert_eq!(engine.moving_average_multiple(&weekly, 4), Some(1.6));
        assert_eq!(engine.moving_average_multiple(&weekly, 200), None);
    }
}
