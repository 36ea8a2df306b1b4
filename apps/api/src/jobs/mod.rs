// Job search: provider actors on Apify, normalization, and the search endpoint.
// Provider failures never reach callers; they are logged and turned into empty results.

pub mod apify;
pub mod handlers;
pub mod posting;
pub mod providers;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::jobs::apify::ApifyClient;
use crate::jobs::providers::JobProvider;

pub const DEFAULT_LOCATION: &str = "india";

/// Keyword search against one provider. Returns raw records, unmodified.
#[async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(
        &self,
        provider: JobProvider,
        query: &str,
        location: &str,
        rows: u32,
    ) -> Vec<Value>;

    async fn fetch_linkedin_jobs(&self, query: &str, location: &str, rows: u32) -> Vec<Value> {
        self.search(JobProvider::Linkedin, query, location, rows)
            .await
    }

    async fn fetch_naukri_jobs(&self, query: &str, location: &str, rows: u32) -> Vec<Value> {
        self.search(JobProvider::Naukri, query, location, rows).await
    }
}

#[derive(Clone)]
pub struct ApifyJobSearch {
    apify: ApifyClient,
}

impl ApifyJobSearch {
    pub fn new(apify: ApifyClient) -> Self {
        Self { apify }
    }
}

#[async_trait]
impl JobSearch for ApifyJobSearch {
    async fn search(
        &self,
        provider: JobProvider,
        query: &str,
        location: &str,
        rows: u32,
    ) -> Vec<Value> {
        info!(
            "Fetching {} jobs for '{query}' ({rows} rows)",
            provider.display_name()
        );
        let input = provider.run_input(query, location, rows);
        match self.apify.call_actor(provider.actor_id(), &input).await {
            Ok(records) => records,
            Err(e) => {
                error!("{} API error: {e}", provider.display_name());
                Vec::new()
            }
        }
    }
}
