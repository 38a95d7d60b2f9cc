//! Top-candidate selection, ordered by descending raw score.
//!
//! The display percentage here always reads the raw score as a 0–10 rating
//! (`raw / 10 × 100`), independently of the normalizer's scale detection.

use serde::Serialize;

use crate::analytics::normalizer::raw_or_zero;
use crate::models::matches::MatchRecord;

/// Number of candidates shown in the top list.
pub const TOP_CANDIDATE_LIMIT: usize = 5;

const RANK_SYMBOLS: [&str; 3] = ["🥇", "🥈", "🥉"];

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// 1-based position.
    pub rank: usize,
    pub rank_symbol: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub raw_score: f64,
    pub percentage: u32,
}

/// Medal for the podium, plain position number after that.
pub fn rank_symbol(rank: usize) -> String {
    match rank {
        1..=3 => RANK_SYMBOLS[rank - 1].to_string(),
        _ => rank.to_string(),
    }
}

/// `raw / 10 × 100`, rounded half away from zero.
pub fn display_percentage(raw: f64) -> u32 {
    ((raw / 10.0) * 100.0).round() as u32
}

/// Returns up to `limit` candidates by descending raw score.
///
/// The sort is stable: equal scores keep their input order, since rank
/// symbols are positional.
pub fn select_top_candidates(records: &[MatchRecord], limit: usize) -> Vec<RankedCandidate> {
    let mut scored: Vec<(f64, &MatchRecord)> = records
        .iter()
        .map(|record| (raw_or_zero(record.raw_score()), record))
        .collect();

    // slice::sort_by is stable
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, (raw, record))| {
            let rank = idx + 1;
            RankedCandidate {
                rank,
                rank_symbol: rank_symbol(rank),
                candidate_id: record.candidate_id.clone(),
                candidate_name: record.display_name().to_string(),
                raw_score: raw,
                percentage: display_percentage(raw),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, score: f64) -> MatchRecord {
        MatchRecord {
            candidate_id: id.to_string(),
            candidate_name: Some(format!("Candidate {id}")),
            score: Some(score),
            ..Default::default()
        }
    }

    #[test]
    fn test_orders_by_descending_raw_score() {
        let records = vec![record("a", 6.0), record("b", 9.5), record("c", 7.25)];
        let top = select_top_candidates(&records, TOP_CANDIDATE_LIMIT);
        let ids: Vec<&str> = top.iter().map(|c| c.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("first", 8.0),
            record("low", 2.0),
            record("second", 8.0),
            record("third", 8.0),
        ];
        let top = select_top_candidates(&records, TOP_CANDIDATE_LIMIT);
        let ids: Vec<&str> = top.iter().map(|c| c.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third", "low"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let records: Vec<MatchRecord> =
            (0..9).map(|i| record(&i.to_string(), i as f64)).collect();
        let top = select_top_candidates(&records, TOP_CANDIDATE_LIMIT);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].candidate_id, "8");
        assert_eq!(top[4].candidate_id, "4");
    }

    #[test]
    fn test_fewer_than_limit_returns_all() {
        let records = vec![record("a", 3.0), record("b", 4.0)];
        assert_eq!(select_top_candidates(&records, TOP_CANDIDATE_LIMIT).len(), 2);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(select_top_candidates(&[], TOP_CANDIDATE_LIMIT).is_empty());
    }

    #[test]
    fn test_percentage_assumes_ten_point_scale() {
        assert_eq!(display_percentage(8.5), 85);
        assert_eq!(display_percentage(7.26), 73);
        assert_eq!(display_percentage(7.24), 72);
        // Percentage-scale input is not detected here.
        assert_eq!(display_percentage(95.0), 950);
    }

    #[test]
    fn test_rank_symbols() {
        assert_eq!(rank_symbol(1), "🥇");
        assert_eq!(rank_symbol(3), "🥉");
        assert_eq!(rank_symbol(4), "4");
        assert_eq!(rank_symbol(5), "5");
    }

    #[test]
    fn test_invalid_score_ranks_as_zero() {
        let records = vec![record("neg", -3.0), record("ok", 1.0)];
        let top = select_top_candidates(&records, TOP_CANDIDATE_LIMIT);
        assert_eq!(top[0].candidate_id, "ok");
        assert_eq!(top[1].raw_score, 0.0);
        assert_eq!(top[1].percentage, 0);
    }

    #[test]
    fn test_missing_name_ranks_as_unknown() {
        let records = vec![MatchRecord {
            score: Some(5.0),
            ..Default::default()
        }];
        let top = select_top_candidates(&records, TOP_CANDIDATE_LIMIT);
        assert_eq!(top[0].candidate_name, "Unknown");
    }
}
