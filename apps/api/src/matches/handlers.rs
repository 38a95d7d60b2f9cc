//! Axum route handlers for match results, analytics and narrative formatting.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::{build_analytics, AnalyticsReport};
use crate::display::{build_match_details, build_match_row, results_label, MatchDetails, MatchRow};
use crate::errors::AppError;
use crate::matches::store::RetainedMatchSet;
use crate::models::matches::MatchSet;
use crate::narrative::{format_justification, render_text, NarrativeBlock};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRunRequest {
    pub job_id: String,
    #[serde(default)]
    pub resume_ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct MatchResultsResponse {
    pub set_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub job_id: String,
    pub job_title: Option<String>,
    pub total: usize,
    pub results_label: String,
    pub rows: Vec<MatchRow>,
    pub analytics: AnalyticsReport,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub set_id: Option<Uuid>,
    pub job_id: Option<String>,
    pub analytics: AnalyticsReport,
}

#[derive(Debug, Deserialize)]
pub struct NarrativeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub blocks: Vec<NarrativeBlock>,
    pub rendered_text: String,
}

fn results_response(retained: RetainedMatchSet) -> MatchResultsResponse {
    let records = &retained.matches.matches;
    MatchResultsResponse {
        set_id: retained.set_id,
        received_at: retained.received_at,
        job_id: retained.matches.job_id.clone(),
        job_title: retained.matches.job_title.clone(),
        total: records.len(),
        results_label: results_label(records.len()),
        rows: records
            .iter()
            .enumerate()
            .map(|(index, record)| build_match_row(index, record))
            .collect(),
        analytics: build_analytics(records),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Runs matching upstream for a job, retains the resulting set and returns
/// the table rows plus analytics.
pub async fn handle_run_matching(
    State(state): State<AppState>,
    Json(request): Json<MatchRunRequest>,
) -> Result<Json<MatchResultsResponse>, AppError> {
    if request.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id cannot be empty".to_string()));
    }

    let set = state
        .matching
        .fetch_matches(&request.job_id, request.resume_ids.as_deref())
        .await?;

    let retained = state.store.replace(set).await;
    Ok(Json(results_response(retained)))
}

/// POST /api/v1/matches/ingest
///
/// Retains a match set supplied directly by the caller.
pub async fn handle_ingest(
    State(state): State<AppState>,
    Json(set): Json<MatchSet>,
) -> Result<Json<MatchResultsResponse>, AppError> {
    if set.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id cannot be empty".to_string()));
    }

    let retained = state.store.replace(set).await;
    Ok(Json(results_response(retained)))
}

/// GET /api/v1/matches/current/analytics
///
/// Recomputes analytics over the retained set. With nothing retained the
/// report is all zeros rather than an error.
pub async fn handle_current_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let response = match state.store.snapshot().await {
        Some(retained) => AnalyticsResponse {
            set_id: Some(retained.set_id),
            analytics: build_analytics(&retained.matches.matches),
            job_id: Some(retained.matches.job_id),
        },
        None => AnalyticsResponse {
            set_id: None,
            job_id: None,
            analytics: build_analytics(&[]),
        },
    };
    Ok(Json(response))
}

/// GET /api/v1/matches/current/:index
///
/// Expanded detail view for one row of the retained set.
pub async fn handle_match_details(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<MatchDetails>, AppError> {
    let retained = state
        .store
        .snapshot()
        .await
        .ok_or_else(|| AppError::NotFound("No match set has been received yet".to_string()))?;

    let record = retained
        .matches
        .matches
        .get(index)
        .ok_or_else(|| AppError::NotFound(format!("Match {index} not found")))?;

    Ok(Json(build_match_details(index, record)))
}

/// POST /api/v1/narrative
///
/// Formats a single justification string.
pub async fn handle_format_narrative(
    Json(request): Json<NarrativeRequest>,
) -> Json<NarrativeResponse> {
    let blocks = format_justification(&request.text);
    let rendered_text = render_text(&blocks);
    Json(NarrativeResponse {
        blocks,
        rendered_text,
    })
}
