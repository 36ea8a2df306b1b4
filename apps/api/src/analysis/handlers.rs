//! Axum route handlers for resume analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::keywords::SearchKeywords;
use crate::analysis::pipeline::{analyze_resume, ResumeAnalysis, SectionOutcome, Stage};
use crate::errors::AppError;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";
const PDF_CONTENT_TYPE: &str = "application/pdf";
const SUCCESS_MESSAGE: &str = "Analysis Completed Successfully!";

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub summary: SectionOutcome,
    pub gaps: SectionOutcome,
    pub roadmap: SectionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<SearchKeywords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_error: Option<String>,
    pub message: String,
}

impl From<ResumeAnalysis> for AnalysisResponse {
    fn from(analysis: ResumeAnalysis) -> Self {
        let failed = analysis.failed_sections();
        let message = if failed == 0 {
            SUCCESS_MESSAGE.to_string()
        } else {
            format!("Analysis completed with {failed} failed section(s).")
        };
        let (search_keywords, keywords_error) = match analysis.keywords {
            Ok(k) => (Some(k), None),
            Err(e) => (None, Some(e)),
        };

        Self {
            analysis_id: analysis.analysis_id,
            completed_at: analysis.completed_at,
            summary: analysis.summary,
            gaps: analysis.gaps,
            roadmap: analysis.roadmap,
            search_keywords,
            keywords_error,
            message,
        }
    }
}

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with a single PDF in the `file` field.
/// Returns summary, skill gaps, roadmap and the keywords to search jobs with.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let document = read_pdf_upload(multipart).await?;

    let analysis = analyze_resume(state.llm.as_ref(), &state.config.llm_model, document).await?;

    Ok(Json(analysis.into()))
}

/// Pulls the PDF out of the multipart body. Other fields are skipped.
async fn read_pdf_upload(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        if !is_pdf_upload(field.file_name(), field.content_type()) {
            return Err(AppError::Validation(
                "Only PDF resumes are accepted".to_string(),
            ));
        }

        return Ok(field.bytes().await?);
    }

    info!(stage = %Stage::Idle, "Analyze request without a resume upload");
    Err(AppError::Validation(format!(
        "No resume uploaded: expected a PDF in the '{UPLOAD_FIELD}' field"
    )))
}

fn is_pdf_upload(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_name = file_name
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    let by_type = content_type
        .map(|t| t.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);
    by_name || by_type
}
