use serde::Serialize;

use crate::models::matches::MatchRecord;
use crate::narrative::inline::decode_inline_markup;
use crate::narrative::{format_justification, NarrativeBlock};

const NO_ITEMS: &str = "None specified";
const NO_MISSING_QUALIFICATIONS: &str = "None";
const NO_JUSTIFICATION: &str = "No justification provided";

/// Expanded per-candidate view: decoded list items and the structured
/// justification.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetails {
    pub index: usize,
    pub candidate_id: String,
    pub candidate_name: String,
    pub matching_points: Vec<String>,
    pub strengths: Vec<String>,
    pub missing_qualifications: Vec<String>,
    pub justification: Vec<NarrativeBlock>,
}

fn decode_items(items: &[String], fallback: &str) -> Vec<String> {
    if items.is_empty() {
        return vec![fallback.to_string()];
    }
    items.iter().map(|item| decode_inline_markup(item)).collect()
}

pub fn build_match_details(index: usize, record: &MatchRecord) -> MatchDetails {
    let justification = if record.justification.trim().is_empty() {
        vec![NarrativeBlock::Paragraph(NO_JUSTIFICATION.to_string())]
    } else {
        format_justification(&decode_inline_markup(&record.justification))
    };

    MatchDetails {
        index,
        candidate_id: record.candidate_id.clone(),
        candidate_name: record.display_name().to_string(),
        matching_points: decode_items(&record.matching_points, NO_ITEMS),
        strengths: decode_items(&record.strengths, NO_ITEMS),
        missing_qualifications: decode_items(
            &record.missing_qualifications,
            NO_MISSING_QUALIFICATIONS,
        ),
        justification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists_use_fallbacks() {
        let details = build_match_details(0, &MatchRecord::default());
        assert_eq!(details.matching_points, vec!["None specified"]);
        assert_eq!(details.strengths, vec!["None specified"]);
        assert_eq!(details.missing_qualifications, vec!["None"]);
        assert_eq!(
            details.justification,
            vec![NarrativeBlock::Paragraph("No justification provided".to_string())]
        );
    }

    #[test]
    fn test_items_are_decoded() {
        let record = MatchRecord {
            matching_points: vec!["**Rust** &amp; tokio".to_string()],
            ..Default::default()
        };
        let details = build_match_details(0, &record);
        assert_eq!(details.matching_points, vec!["<strong>Rust</strong> & tokio"]);
    }

    #[test]
    fn test_bold_fraction_in_justification_is_not_rewrapped() {
        let record = MatchRecord {
            justification: "Scored **3/4** on systems design. Also knows SQL (2/2).".to_string(),
            ..Default::default()
        };
        let details = build_match_details(1, &record);
        assert_eq!(
            details.justification,
            vec![NarrativeBlock::Paragraph(
                "Scored <strong>3/4</strong> on systems design. \
                 Also knows SQL (<strong>2/2</strong>)."
                    .to_string()
            )]
        );
    }
}
