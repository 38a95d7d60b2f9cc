//! Score normalization — maps a raw score of ambiguous scale onto 0–100.
//!
//! Raw scores arrive untagged: a value ≤ 10 is read as a 0–10 rating and
//! scaled up, anything above 10 is taken to be a percentage already. A
//! percentage that happens to equal 10 or less is misread as a rating.

use thiserror::Error;
use tracing::warn;

/// Values at or below this are treated as a 0–10 rating.
pub const RATING_SCALE_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreError {
    #[error("invalid score {0}: must be a finite, non-negative number")]
    InvalidScore(f64),
}

/// Rejects NaN, infinite and negative raw scores.
pub fn validate_raw_score(raw: f64) -> Result<f64, ScoreError> {
    if !raw.is_finite() || raw < 0.0 {
        return Err(ScoreError::InvalidScore(raw));
    }
    // -0.0 passes the check above; fold it so ordering treats it as zero
    Ok(if raw == 0.0 { 0.0 } else { raw })
}

/// Normalizes one raw score: `raw × 10` when `raw ≤ 10`, otherwise `raw`.
pub fn normalize_score(raw: f64) -> Result<f64, ScoreError> {
    let raw = validate_raw_score(raw)?;
    if raw <= RATING_SCALE_MAX {
        Ok(raw * 10.0)
    } else {
        Ok(raw)
    }
}

/// Like [`normalize_score`], but substitutes 0 for an invalid score and logs it.
pub fn normalize_or_zero(raw: f64) -> f64 {
    normalize_score(raw).unwrap_or_else(|err| {
        warn!("Substituting 0 for unusable match score: {err}");
        0.0
    })
}

/// Validated raw score, or 0 (logged) when invalid. Used where the raw value
/// is needed without rescaling, e.g. ranking.
pub fn raw_or_zero(raw: f64) -> f64 {
    validate_raw_score(raw).unwrap_or_else(|err| {
        warn!("Substituting 0 for unusable match score: {err}");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_scale_multiplied_by_ten() {
        assert_eq!(normalize_score(8.5).unwrap(), 85.0);
        assert_eq!(normalize_score(3.0).unwrap(), 30.0);
        assert_eq!(normalize_score(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_percentage_scale_passes_through() {
        assert_eq!(normalize_score(95.0).unwrap(), 95.0);
        assert_eq!(normalize_score(10.5).unwrap(), 10.5);
    }

    #[test]
    fn test_boundary_ten_is_read_as_rating() {
        // A genuine 10% is indistinguishable from a perfect 10/10.
        assert_eq!(normalize_score(10.0).unwrap(), 100.0);
    }

    #[test]
    fn test_every_rating_value_scales() {
        for tenth in 0..=100 {
            let raw = tenth as f64 / 10.0;
            assert_eq!(normalize_score(raw).unwrap(), raw * 10.0);
        }
    }

    #[test]
    fn test_negative_and_nan_are_invalid() {
        assert_eq!(normalize_score(-1.0), Err(ScoreError::InvalidScore(-1.0)));
        assert!(normalize_score(f64::NAN).is_err());
        assert!(normalize_score(f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_score_recovers_to_zero() {
        assert_eq!(normalize_or_zero(-4.0), 0.0);
        assert_eq!(normalize_or_zero(f64::NAN), 0.0);
        assert_eq!(raw_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(raw_or_zero(7.5), 7.5);
    }

    #[test]
    fn test_negative_zero_folds_to_zero() {
        let value = validate_raw_score(-0.0).unwrap();
        assert!(value.is_sign_positive());
    }
}
