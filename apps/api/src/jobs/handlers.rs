//! Axum route handler for job recommendations.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::keywords::SearchKeywords;
use crate::analysis::pipeline::{recommend_jobs, JobRecommendations};
use crate::errors::AppError;
use crate::state::AppState;

const MAX_ROWS: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct SearchJobsRequest {
    /// Usually the `search_keywords` returned by the analyze endpoint.
    pub keywords: String,
    pub rows: Option<u32>,
    pub location: Option<String>,
}

/// POST /api/v1/jobs/search
///
/// Queries both providers with the same keywords. Provider failures show up
/// as empty sections, never as an error response.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(request): Json<SearchJobsRequest>,
) -> Result<Json<JobRecommendations>, AppError> {
    let keywords = SearchKeywords::parse(&request.keywords)
        .ok_or_else(|| AppError::Validation("keywords cannot be empty".to_string()))?;

    let rows = request.rows.unwrap_or(state.config.job_search_rows);
    if rows == 0 || rows > MAX_ROWS {
        return Err(AppError::Validation(format!(
            "rows must be between 1 and {MAX_ROWS}"
        )));
    }

    let location = request
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(&state.config.job_search_location);

    let jobs = recommend_jobs(state.job_search.as_ref(), &keywords, location, rows).await;
    Ok(Json(jobs))
}
