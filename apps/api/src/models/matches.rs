use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display name used when the Matching Service omits a candidate name.
pub const UNKNOWN_CANDIDATE: &str = "Unknown";

/// One candidate-to-job scoring result as supplied by the Matching Service.
///
/// Records are immutable once received. The score carries no scale tag: it
/// may be a 0–10 rating or an already-percentage 0–100 value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default, alias = "resume_id")]
    pub candidate_id: String,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_score::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
    /// Older matcher builds report the score under this name instead.
    #[serde(
        default,
        deserialize_with = "lenient_score::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub matching_points: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub missing_qualifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl MatchRecord {
    /// The raw score as reported, falling back to `match_score` when `score`
    /// is absent or zero, and to 0 when neither is present.
    pub fn raw_score(&self) -> f64 {
        match self.score {
            Some(score) if score != 0.0 => score,
            _ => self.match_score.unwrap_or(0.0),
        }
    }

    pub fn display_name(&self) -> &str {
        match self.candidate_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_CANDIDATE,
        }
    }
}

/// Score fields accept numbers and numeric strings. Any other non-null value
/// becomes NaN, which the analytics stage logs and counts as 0.
mod lenient_score {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let score = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => None,
            Some(Value::Number(number)) => Some(number.as_f64().unwrap_or(f64::NAN)),
            Some(Value::String(text)) => Some(text.trim().parse::<f64>().unwrap_or(f64::NAN)),
            Some(_) => Some(f64::NAN),
        };
        Ok(score)
    }
}

/// The full, arbitrarily ordered result of one matching run for a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSet {
    pub job_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}
