//! Rendering-ready view models for the match results table and the
//! per-candidate detail panel.

pub mod details;
pub mod rows;

pub use details::{build_match_details, MatchDetails};
pub use rows::{build_match_row, results_label, MatchRow};
