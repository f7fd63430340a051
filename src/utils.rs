use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::errors::AppError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Midnight UTC on the given calendar date.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days from `from` to `to`, floored (negative spans round toward -inf).
pub fn floor_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Fractional days from `from` to `to`.
pub fn fractional_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / (SECONDS_PER_DAY as f64 * 1_000.0)
}

/// Round to the nearest integer and saturate into 0..=100.
///
/// NaN carries no information and maps to 0.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Parse a user-supplied market price: a finite, non-negative number.
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("price {:?} is not a number: {}", raw, e))?;

    if !price.is_finite() || price < 0.0 {
        return Err(format!("price must be a finite non-negative number, got {}", raw).into());
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_floor_days_between_rounds_down() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(floor_days_between(from, from + Duration::hours(47)), 1);
        assert_eq!(floor_days_between(from, from - Duration::hours(1)), -1);
        assert_eq!(floor_days_between(from, from), 0);
    }

    #[test]
    fn test_clamp_score_saturates() {
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(49.5), 50);
        assert_eq!(clamp_score(250.0), 100);
        assert_eq!(clamp_score(f64::INFINITY), 100);
        assert_eq!(clamp_score(f64::NEG_INFINITY), 0);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_start_of_day_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        assert_eq!(
            start_of_day(date),
            Utc.with_ymd_and_hms(2024, 4, 20, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_price_accepts_numbers() {
        assert_eq!(parse_price("1e3").unwrap(), 1_000.0);
        assert_eq!(parse_price(" 64250.5 ").unwrap(), 64_250.5);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_price_rejects_garbage_as_validation() {
        for raw in ["1e3x", "", "-5", "inf", "NaN"] {
            assert!(
                matches!(parse_price(raw), Err(AppError::Validation(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
