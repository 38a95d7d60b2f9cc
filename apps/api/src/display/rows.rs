use serde::Serialize;

use crate::analytics::normalizer::raw_or_zero;
use crate::models::matches::MatchRecord;

/// Characters of justification shown in the collapsed row.
pub const PREVIEW_CHARS: usize = 100;

/// Badge class for a raw 0–10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

impl ScoreClass {
    pub fn for_raw_score(score: f64) -> Self {
        if score >= 7.0 {
            ScoreClass::High
        } else if score >= 5.0 {
            ScoreClass::Medium
        } else {
            ScoreClass::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    pub index: usize,
    pub candidate_id: String,
    pub candidate_name: String,
    pub resume_filename: String,
    pub score: f64,
    pub score_display: String,
    pub score_class: ScoreClass,
    pub justification_preview: String,
}

/// `8/10` for whole scores, one rounded decimal (`8.5/10`) otherwise.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score}/10")
    } else {
        let tenths = (score * 10.0).round() / 10.0;
        format!("{tenths:.1}/10")
    }
}

/// First [`PREVIEW_CHARS`] characters followed by an ellipsis.
pub fn justification_preview(justification: &str) -> String {
    let head: String = justification.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

pub fn results_label(count: usize) -> String {
    let noun = if count == 1 { "candidate" } else { "candidates" };
    format!("{count} {noun} found")
}

pub fn build_match_row(index: usize, record: &MatchRecord) -> MatchRow {
    let score = raw_or_zero(record.raw_score());
    MatchRow {
        index,
        candidate_id: record.candidate_id.clone(),
        candidate_name: record.display_name().to_string(),
        resume_filename: record.resume_filename.clone().unwrap_or_default(),
        score,
        score_display: format_score(score),
        score_class: ScoreClass::for_raw_score(score),
        justification_preview: justification_preview(&record.justification),
    }
}
