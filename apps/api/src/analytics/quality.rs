use serde::Serialize;

/// Normalized score at or above which a match counts as high quality.
pub const HIGH_QUALITY_THRESHOLD: f64 = 70.0;

/// Summary statistics over the normalized scores of a match set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub total_candidates: usize,
    pub average_score: f64,
    pub high_quality_count: usize,
    /// `high_quality_count / total × 100`, rounded to two decimals.
    pub quality_rate: f64,
    pub average_display: String,
    pub quality_rate_display: String,
}

/// Average, high-quality count and quality rate. An empty slice yields zeros.
/// Order-independent.
pub fn compute_quality_metrics(normalized: &[f64]) -> QualityMetrics {
    let total = normalized.len();
    if total == 0 {
        return QualityMetrics {
            total_candidates: 0,
            average_score: 0.0,
            high_quality_count: 0,
            quality_rate: 0.0,
            average_display: format_average(0.0),
            quality_rate_display: format_rate(0.0),
        };
    }

    let average = normalized.iter().sum::<f64>() / total as f64;
    let high_quality_count = normalized
        .iter()
        .filter(|&&score| score >= HIGH_QUALITY_THRESHOLD)
        .count();
    let rate = high_quality_count as f64 / total as f64 * 100.0;

    QualityMetrics {
        total_candidates: total,
        average_score: average,
        high_quality_count,
        quality_rate: round_to_hundredths(rate),
        average_display: format_average(average),
        quality_rate_display: format_rate(rate),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_average(average: f64) -> String {
    format!("{average:.1}%")
}

fn format_rate(rate: f64) -> String {
    format!("{}%", rate.round() as u32)
}
