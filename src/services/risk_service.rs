use tracing::{debug, warn};

use crate::models::{MarketPhase, RiskWeights};
use crate::utils::clamp_score;

/// Signed deviation of `price` from `fair_value`, as a ratio.
///
/// A non-positive or non-finite fair value carries no baseline and yields 0.
pub fn deviation(price: f64, fair_value: f64) -> f64 {
    if !fair_value.is_finite() || fair_value <= 0.0 {
        warn!("Unusable fair value {}, treating deviation as zero", fair_value);
        return 0.0;
    }
    (price - fair_value) / fair_value
}

/// Map a deviation ratio onto 0-100: -1 -> 0, 0 -> 50, +1 -> 100, saturating.
pub fn deviation_score(deviation: f64) -> u8 {
    if !deviation.is_finite() {
        warn!("Non-finite deviation {} (non-finite price?), score saturates", deviation);
    }
    clamp_score((deviation + 1.0) * 50.0)
}

/// Blend deviation and cycle scores into the final 0-100 risk score.
pub fn blend_risk_score(deviation_score: u8, cycle_percent: u8, weights: &RiskWeights) -> u8 {
    let blended =
        weights.deviation * f64::from(deviation_score) + weights.cycle * f64::from(cycle_percent);
    let score = clamp_score(blended);

    debug!(deviation_score, cycle_percent, risk_score = score, "risk score blended");
    score
}

/// Classify the market phase.
///
/// Rules are checked in order and the first match wins:
/// - Accumulation: risk < 30 AND cycle < 40
/// - Expansion: risk < 60 AND cycle < 70
/// - Euphoria: risk >= 60
/// - Recession: everything else, including moderate risk late in the cycle
pub fn phase(risk_score: u8, cycle_percent: u8) -> MarketPhase {
    if risk_score < 30 && cycle_percent < 40 {
        MarketPhase::Accumulation
    } else if risk_score < 60 && cycle_percent < 70 {
        MarketPhase::Expansion
    } else if risk_score >= 60 {
        MarketPhase::Euphoria
    } else {
        MarketPhase::Recession
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn warnings_from(f: impl FnOnce()) -> String {
        let captured = CapturedLogs::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_deviation_ratio() {
        assert_eq!(deviation(150.0, 100.0), 0.5);
        assert_eq!(deviation(50.0, 100.0), -0.5);
        assert_eq!(deviation(100.0, 100.0), 0.0);
        assert_eq!(deviation(100.0, 0.0), 0.0);
        assert_eq!(deviation(100.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_deviation_score_mapping() {
        assert_eq!(deviation_score(0.0), 50);
        assert_eq!(deviation_score(-1.0), 0);
        assert_eq!(deviation_score(1.0), 100);
        assert_eq!(deviation_score(0.5), 75);
        assert_eq!(deviation_score(-0.25), 38);
    }

    #[test]
    fn test_deviation_score_saturates() {
        assert_eq!(deviation_score(-5.0), 0);
        assert_eq!(deviation_score(42.0), 100);
        assert_eq!(deviation_score(f64::INFINITY), 100);
        assert_eq!(deviation_score(f64::NEG_INFINITY), 0);
        assert_eq!(deviation_score(f64::NAN), 0);
    }

    #[test]
    fn test_infinite_deviation_logs_warning() {
        let logs = warnings_from(|| assert_eq!(deviation_score(f64::INFINITY), 100));
        assert!(logs.contains("Non-finite deviation inf"), "{}", logs);

        let logs = warnings_from(|| assert_eq!(deviation_score(f64::NEG_INFINITY), 0));
        assert!(logs.contains("Non-finite deviation -inf"), "{}", logs);

        let logs = warnings_from(|| assert_eq!(deviation_score(0.5), 75));
        assert!(logs.is_empty(), "{}", logs);
    }

    #[test]
    fn test_blend_risk_score_default_weights() {
        let weights = RiskWeights::default();
        assert_eq!(blend_risk_score(50, 50, &weights), 50);
        assert_eq!(blend_risk_score(100, 100, &weights), 100);
        assert_eq!(blend_risk_score(0, 0, &weights), 0);
        // 0.6 * 75 + 0.4 * 20 = 53
        assert_eq!(blend_risk_score(75, 20, &weights), 53);
    }

    #[test]
    fn test_blend_risk_score_clamps_heavy_weights() {
        let weights = RiskWeights { deviation: 2.0, cycle: 2.0 };
        assert_eq!(blend_risk_score(80, 90, &weights), 100);
    }

    #[test]
    fn test_phase_precedence() {
        assert_eq!(phase(25, 35), MarketPhase::Accumulation);
        assert_eq!(phase(25, 50), MarketPhase::Expansion);
        assert_eq!(phase(45, 60), MarketPhase::Expansion);
        assert_eq!(phase(65, 90), MarketPhase::Euphoria);
        assert_eq!(phase(60, 10), MarketPhase::Euphoria);
        assert_eq!(phase(45, 75), MarketPhase::Recession);
        assert_eq!(phase(10, 95), MarketPhase::Recession);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(phase(29, 39), MarketPhase::Accumulation);
        assert_eq!(phase(30, 39), MarketPhase::Expansion);
        assert_eq!(phase(29, 40), MarketPhase::Expansion);
        assert_eq!(phase(59, 69), MarketPhase::Expansion);
        assert_eq!(phase(59, 70), MarketPhase::Recession);
        assert_eq!(phase(60, 70), MarketPhase::Euphoria);
    }
}
