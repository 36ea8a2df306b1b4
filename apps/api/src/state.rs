use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobSearch;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data: every analysis lives only as long as its request.
#[derive(Clone)]
pub struct AppState {
    /// Chat Completions client in production, scripted fakes in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub job_search: Arc<dyn JobSearch>,
    pub config: Config,
}
