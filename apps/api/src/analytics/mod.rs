//! Match-set analytics: score distribution, top candidates, quality metrics
//! and the skills match/gap split.
//!
//! Every function here is pure. [`build_analytics`] can be called again on
//! the same records at any time (e.g. on a display-mode change) and yields
//! the same report.

pub mod buckets;
pub mod normalizer;
pub mod quality;
pub mod ranking;
pub mod skills;

use serde::Serialize;
use tracing::debug;

use crate::analytics::buckets::{aggregate_buckets, BucketRow};
use crate::analytics::normalizer::normalize_or_zero;
use crate::analytics::quality::{compute_quality_metrics, QualityMetrics};
use crate::analytics::ranking::{select_top_candidates, RankedCandidate, TOP_CANDIDATE_LIMIT};
use crate::analytics::skills::{compute_skills_split, SkillsSplit};
use crate::models::matches::MatchRecord;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub total_candidates: usize,
    /// Excellent, Good, Average, Below Average — in that order.
    pub buckets: Vec<BucketRow>,
    pub top_candidates: Vec<RankedCandidate>,
    pub quality: QualityMetrics,
    pub skills: SkillsSplit,
}

/// Normalized score per record, in input order. Invalid scores become 0.
pub fn normalized_scores(records: &[MatchRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|record| normalize_or_zero(record.raw_score()))
        .collect()
}

pub fn build_analytics(records: &[MatchRecord]) -> AnalyticsReport {
    let normalized = normalized_scores(records);
    let buckets = aggregate_buckets(&normalized);
    debug!(
        total = buckets.total(),
        excellent = buckets.excellent,
        good = buckets.good,
        average = buckets.average,
        below_average = buckets.below_average,
        "Computed score distribution"
    );

    AnalyticsReport {
        total_candidates: records.len(),
        buckets: buckets.rows(),
        top_candidates: select_top_candidates(records, TOP_CANDIDATE_LIMIT),
        quality: compute_quality_metrics(&normalized),
        skills: compute_skills_split(&normalized),
    }
}
