//! Score distribution — a fixed four-band histogram over normalized scores.

use serde::Serialize;

/// One of the four fixed score bands. Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    Excellent,
    Good,
    Average,
    BelowAverage,
}

impl ScoreBucket {
    /// Display order: best band first.
    pub const ALL: [ScoreBucket; 4] = [
        ScoreBucket::Excellent,
        ScoreBucket::Good,
        ScoreBucket::Average,
        ScoreBucket::BelowAverage,
    ];

    /// Classifies a normalized score: [80, ∞) / [60, 80) / [40, 60) / below 40.
    pub fn for_score(normalized: f64) -> Self {
        if normalized >= 80.0 {
            ScoreBucket::Excellent
        } else if normalized >= 60.0 {
            ScoreBucket::Good
        } else if normalized >= 40.0 {
            ScoreBucket::Average
        } else {
            ScoreBucket::BelowAverage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "Excellent (80-100)",
            ScoreBucket::Good => "Good (60-79)",
            ScoreBucket::Average => "Average (40-59)",
            ScoreBucket::BelowAverage => "Below Average (0-39)",
        }
    }

    /// Compact two-line label for chart axes.
    pub fn chart_label(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "Excellent\n80-100",
            ScoreBucket::Good => "Good\n60-79",
            ScoreBucket::Average => "Average\n40-59",
            ScoreBucket::BelowAverage => "Below Avg\n0-39",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub below_average: usize,
}

impl BucketCounts {
    pub fn get(&self, bucket: ScoreBucket) -> usize {
        match bucket {
            ScoreBucket::Excellent => self.excellent,
            ScoreBucket::Good => self.good,
            ScoreBucket::Average => self.average,
            ScoreBucket::BelowAverage => self.below_average,
        }
    }

    fn increment(&mut self, bucket: ScoreBucket) {
        match bucket {
            ScoreBucket::Excellent => self.excellent += 1,
            ScoreBucket::Good => self.good += 1,
            ScoreBucket::Average => self.average += 1,
            ScoreBucket::BelowAverage => self.below_average += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.average + self.below_average
    }

    /// Rendering-ready rows in display order.
    pub fn rows(&self) -> Vec<BucketRow> {
        ScoreBucket::ALL
            .iter()
            .map(|&bucket| BucketRow {
                bucket,
                label: bucket.label(),
                chart_label: bucket.chart_label(),
                count: self.get(bucket),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketRow {
    pub bucket: ScoreBucket,
    pub label: &'static str,
    pub chart_label: &'static str,
    pub count: usize,
}

/// Counts normalized scores per band in a single pass. Empty input yields zeros.
pub fn aggregate_buckets(normalized: &[f64]) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for &score in normalized {
        counts.increment(ScoreBucket::for_score(score));
    }
    counts
}
