use serde::Serialize;
use serde_json::Value;

use crate::jobs::providers::JobProvider;

/// A job listing normalized across providers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub provider: JobProvider,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
}

impl JobPosting {
    /// Maps a raw provider record. Missing or non-string fields become `None`.
    pub fn from_record(provider: JobProvider, record: &Value) -> Self {
        Self {
            provider,
            title: string_field(record, "title"),
            company_name: string_field(record, "companyName"),
            location: string_field(record, "location"),
            link: string_field(record, provider.link_field()),
        }
    }
}

pub fn normalize(provider: JobProvider, records: &[Value]) -> Vec<JobPosting> {
    records
        .iter()
        .map(|r| JobPosting::from_record(provider, r))
        .collect()
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
