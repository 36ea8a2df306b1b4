//! Minimal client for the Apify actor API: start a run, wait for it, read its dataset.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_APIFY_BASE_URL: &str = "https://api.apify.com";
/// Seconds the API may hold a status request open while the run finishes.
const WAIT_FOR_FINISH_SECS: u64 = 60;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(WAIT_FOR_FINISH_SECS + 30);

#[derive(Debug, Error)]
pub enum ApifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Actor run {run_id} finished with status {status}")]
    RunFailed { run_id: String, status: String },

    #[error("Actor run {run_id} still {status} after {rounds} wait rounds")]
    WaitExhausted {
        run_id: String,
        status: String,
        rounds: u32,
    },

    #[error("Dataset items were not a JSON array")]
    UnexpectedItems,
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    data: ActorRun,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRun {
    pub id: String,
    pub status: String,
    pub default_dataset_id: String,
}

impl ActorRun {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status.as_str(),
            "SUCCEEDED" | "FAILED" | "ABORTED" | "TIMED-OUT"
        )
    }
}

#[derive(Clone)]
pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
    max_wait_rounds: u32,
}

impl ApifyClient {
    pub fn new(token: String, base_url: String, max_wait_rounds: u32) -> Result<Self, ApifyError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_wait_rounds: max_wait_rounds.max(1),
        })
    }

    /// Runs an actor with the given input and returns every item of its default dataset.
    pub async fn call_actor(&self, actor_id: &str, input: &Value) -> Result<Vec<Value>, ApifyError> {
        let run = self.start_run(actor_id, input).await?;
        info!("Started actor {actor_id} run {} ({})", run.id, run.status);

        let run = self.wait_for_run(run).await?;
        if run.status != "SUCCEEDED" {
            return Err(ApifyError::RunFailed {
                run_id: run.id,
                status: run.status,
            });
        }

        let items = self.dataset_items(&run.default_dataset_id).await?;
        info!(
            "Actor {actor_id} run {} returned {} items",
            run.id,
            items.len()
        );
        Ok(items)
    }

    async fn start_run(&self, actor_id: &str, input: &Value) -> Result<ActorRun, ApifyError> {
        let url = format!("{}/v2/acts/{}/runs", self.base_url, actor_id);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;
        let envelope: RunEnvelope = check_status(response).await?.json().await?;
        Ok(envelope.data)
    }

    async fn wait_for_run(&self, mut run: ActorRun) -> Result<ActorRun, ApifyError> {
        let mut rounds = 0;
        while !run.is_terminal() {
            if rounds == self.max_wait_rounds {
                return Err(ApifyError::WaitExhausted {
                    run_id: run.id,
                    status: run.status,
                    rounds,
                });
            }
            rounds += 1;
            debug!("Waiting on run {} (status {}, round {rounds})", run.id, run.status);

            let url = format!("{}/v2/actor-runs/{}", self.base_url, run.id);
            let response = self
                .client
                .get(url)
                .bearer_auth(&self.token)
                .query(&[("waitForFinish", WAIT_FOR_FINISH_SECS)])
                .send()
                .await?;
            let envelope: RunEnvelope = check_status(response).await?.json().await?;
            run = envelope.data;
        }
        Ok(run)
    }

    async fn dataset_items(&self, dataset_id: &str) -> Result<Vec<Value>, ApifyError> {
        let url = format!("{}/v2/datasets/{}/items", self.base_url, dataset_id);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("format", "json"), ("clean", "true")])
            .send()
            .await?;
        match check_status(response).await?.json::<Value>().await? {
            Value::Array(items) => Ok(items),
            _ => Err(ApifyError::UnexpectedItems),
        }
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApifyError::Api {
        status: status.as_u16(),
        message,
    })
}
