//! Axum route handlers for the Matching API.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::engine::{match_candidates, Summary};
use crate::matching::export::to_csv;
use crate::matching::models::JobResult;
use crate::matching::rows::{CandidateRow, JobRow};
use crate::matching::scorer::{RandomSkillScorer, SkillScorer};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub jobs: Vec<JobRow>,
    #[serde(default)]
    pub candidates: Vec<CandidateRow>,
    /// Overrides the configured scorer with a seeded random scorer for this
    /// run only, for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub results: Vec<JobResult>,
    pub summary: Summary,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Runs the eligibility and ranking pipeline over already-parsed job and
/// candidate rows. Responds with one result per job plus summary aggregates.
/// Empty input maps to 422 NO_INPUT_DATA rather than an internal error.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let run_id = Uuid::new_v4();
    info!(
        %run_id,
        jobs = request.jobs.len(),
        candidates = request.candidates.len(),
        "match run started"
    );

    let (results, scorer_backend) = run_match(&state, request)?;
    let summary = Summary::from_results(&results);

    Ok(Json(MatchResponse {
        results,
        summary,
        scorer_backend,
    }))
}

/// POST /api/v1/match/export
///
/// Same pipeline, but responds with the CSV projection as a dated attachment,
/// mirroring the presentation layer's download contract.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (results, _) = run_match(&state, request)?;
    let csv = to_csv(&results)?;

    let filename = format!(
        "job_matching_results_{}.csv",
        Utc::now().format("%Y-%m-%d")
    );
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, csv))
}

/// Maps rows into domain records and runs the engine with either the shared
/// scorer or a request-seeded one.
fn run_match(
    state: &AppState,
    request: MatchRequest,
) -> Result<(Vec<JobResult>, String), AppError> {
    let jobs: Vec<_> = request.jobs.into_iter().map(JobRow::into_posting).collect();
    let candidates: Vec<_> = request
        .candidates
        .into_iter()
        .map(CandidateRow::into_candidate)
        .collect();

    match request.seed {
        Some(seed) => {
            let scorer = RandomSkillScorer::seeded(seed);
            let results = match_candidates(&jobs, &candidates, &scorer)?;
            Ok((results, format!("random (seed {seed})")))
        }
        None => {
            let results = match_candidates(&jobs, &candidates, state.scorer.as_ref())?;
            Ok((results, state.scorer.backend().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_request_deserializes_row_payload() {
        let request: MatchRequest = serde_json::from_value(json!({
            "jobs": [{
                "Company Name": "Acme",
                "Role": "Data Engineer",
                "Required Skills": "Python, SQL",
                "Eligible Degrees": "Any",
                "Country": "India",
                "Requirement Count": "2"
            }],
            "candidates": [{
                "Name": "Asha",
                "Country": "India",
                "Degree": "Computer Science",
                "Skills": "Python",
                "Resume Link": "https://drive.google.com/file/d/a"
            }],
            "seed": 42
        }))
        .unwrap();

        assert_eq!(request.jobs.len(), 1);
        assert_eq!(request.candidates.len(), 1);
        assert_eq!(request.seed, Some(42));
    }

    #[test]
    fn test_match_request_fields_all_optional() {
        let request: MatchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.jobs.is_empty());
        assert!(request.candidates.is_empty());
        assert_eq!(request.seed, None);
    }
}
