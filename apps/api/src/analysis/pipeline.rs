//! Resume analysis pipeline.
//!
//! Flow: extract text → (summary | gaps | roadmap | keywords) → present.
//! Job search runs later, only when the user asks for it, from the keywords
//! returned here.
//!
//! An extraction failure stops everything before the first LLM call. An LLM failure
//! only marks its own section as failed.

use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::keywords::SearchKeywords;
use crate::analysis::prompts::{
    fill, KEYWORDS_PROMPT, ROADMAP_PROMPT, SKILL_GAPS_PROMPT, SUMMARY_PROMPT,
};
use crate::extract::{extract_text_from_pdf, extraction_error, is_extraction_error};
use crate::jobs::posting::{normalize, JobPosting};
use crate::jobs::providers::JobProvider;
use crate::jobs::JobSearch;
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Extracting,
    Analyzing,
    Presenting,
    SearchRequested,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Extracting => "extracting",
            Stage::Analyzing => "analyzing",
            Stage::Presenting => "presenting",
            Stage::SearchRequested => "search_requested",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Carries the extractor's sentinel text unchanged.
    #[error("{0}")]
    Extraction(String),
}

/// Outcome of one analysis section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    Ok { text: String },
    Failed { error: String },
}

impl SectionOutcome {
    fn from_result(section: &str, result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => SectionOutcome::Ok { text },
            Err(e) => {
                warn!("{section} generation failed: {e}");
                SectionOutcome::Failed {
                    error: format!("Could not generate {section}: {e}"),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SectionOutcome::Ok { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ResumeAnalysis {
    pub analysis_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub summary: SectionOutcome,
    pub gaps: SectionOutcome,
    pub roadmap: SectionOutcome,
    pub keywords: Result<SearchKeywords, String>,
}

impl ResumeAnalysis {
    pub fn failed_sections(&self) -> usize {
        [&self.summary, &self.gaps, &self.roadmap]
            .iter()
            .filter(|s| !s.is_ok())
            .count()
    }
}

/// Runs extraction and the four LLM requests for one uploaded document.
pub async fn analyze_resume(
    llm: &dyn TextGenerator,
    model: &str,
    document: Bytes,
) -> Result<ResumeAnalysis, PipelineError> {
    let analysis_id = Uuid::new_v4();
    info!(%analysis_id, stage = %Stage::Extracting, "Extracting resume text ({} bytes)", document.len());

    let resume_text = extract_off_runtime(document).await;
    if is_extraction_error(&resume_text) {
        warn!(%analysis_id, stage = %Stage::Failed, "{resume_text}");
        return Err(PipelineError::Extraction(resume_text));
    }
    if resume_text.is_empty() {
        warn!(%analysis_id, "Resume contains no extractable text");
    }

    info!(%analysis_id, stage = %Stage::Analyzing, "Generating summary, skill gaps, roadmap and keywords");
    let summary_prompt = fill(SUMMARY_PROMPT, &resume_text);
    let gaps_prompt = fill(SKILL_GAPS_PROMPT, &resume_text);
    let roadmap_prompt = fill(ROADMAP_PROMPT, &resume_text);
    let keywords_prompt = fill(KEYWORDS_PROMPT, &resume_text);

    let (summary, gaps, roadmap, keywords) = tokio::join!(
        llm.generate(&summary_prompt, model),
        llm.generate(&gaps_prompt, model),
        llm.generate(&roadmap_prompt, model),
        llm.generate(&keywords_prompt, model),
    );

    let keywords = match keywords {
        Ok(raw) => SearchKeywords::parse(&raw)
            .ok_or_else(|| "The model returned no usable search keywords".to_string()),
        Err(e) => {
            warn!(%analysis_id, "keyword extraction failed: {e}");
            Err(format!("Could not extract search keywords: {e}"))
        }
    };

    let analysis = ResumeAnalysis {
        analysis_id,
        completed_at: Utc::now(),
        summary: SectionOutcome::from_result("resume summary", summary),
        gaps: SectionOutcome::from_result("skill gaps", gaps),
        roadmap: SectionOutcome::from_result("roadmap", roadmap),
        keywords,
    };

    info!(
        %analysis_id,
        stage = %Stage::Presenting,
        "Analysis finished with {} failed section(s)",
        analysis.failed_sections()
    );
    Ok(analysis)
}

/// pdf-extract is synchronous and CPU-bound.
async fn extract_off_runtime(document: Bytes) -> String {
    tokio::task::spawn_blocking(move || extract_text_from_pdf(Some(&document[..])))
        .await
        .unwrap_or_else(|e| extraction_error(&e.to_string()))
}

/// Postings from one provider, with the message to show when there are none.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSection {
    pub provider: JobProvider,
    pub heading: &'static str,
    pub postings: Vec<JobPosting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl ProviderSection {
    pub fn new(provider: JobProvider, postings: Vec<JobPosting>) -> Self {
        let empty_message = postings.is_empty().then(|| provider.empty_message());
        Self {
            provider,
            heading: provider.heading(),
            postings,
            empty_message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRecommendations {
    pub searched_for: String,
    pub linkedin: ProviderSection,
    pub naukri: ProviderSection,
}

/// Queries both providers at once. Never fails: provider errors come back as empty sections.
pub async fn recommend_jobs(
    search: &dyn JobSearch,
    keywords: &SearchKeywords,
    location: &str,
    rows: u32,
) -> JobRecommendations {
    info!(
        stage = %Stage::SearchRequested,
        "Searching jobs for: {keywords} ({} terms)",
        keywords.terms().count()
    );

    let (linkedin, naukri) = tokio::join!(
        search.fetch_linkedin_jobs(keywords.as_str(), location, rows),
        search.fetch_naukri_jobs(keywords.as_str(), location, rows),
    );

    JobRecommendations {
        searched_for: keywords.to_string(),
        linkedin: ProviderSection::new(
            JobProvider::Linkedin,
            normalize(JobProvider::Linkedin, &linkedin),
        ),
        naukri: ProviderSection::new(JobProvider::Naukri, normalize(JobProvider::Naukri, &naukri)),
    }
}
