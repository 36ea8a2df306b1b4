//! Actor inputs for the two job-listing providers.

use serde::Serialize;
use serde_json::{json, Value};

pub const LINKEDIN_ACTOR_ID: &str = "BHzefUZlZRKWxkTck";
pub const NAUKRI_ACTOR_ID: &str = "alpcnRV9YI9lYVPWk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobProvider {
    Linkedin,
    Naukri,
}

impl JobProvider {
    pub fn actor_id(self) -> &'static str {
        match self {
            JobProvider::Linkedin => LINKEDIN_ACTOR_ID,
            JobProvider::Naukri => NAUKRI_ACTOR_ID,
        }
    }

    /// Record key holding the posting URL. The providers disagree on it.
    pub fn link_field(self) -> &'static str {
        match self {
            JobProvider::Linkedin => "link",
            JobProvider::Naukri => "url",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            JobProvider::Linkedin => "LinkedIn",
            JobProvider::Naukri => "Naukri",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            JobProvider::Linkedin => "LinkedIn Jobs",
            JobProvider::Naukri => "Naukri Jobs (India)",
        }
    }

    pub fn empty_message(self) -> String {
        format!("No {} jobs found.", self.display_name())
    }

    /// Builds the actor input. Naukri has no location filter, so `location` is ignored there.
    pub fn run_input(self, query: &str, location: &str, rows: u32) -> Value {
        match self {
            JobProvider::Linkedin => json!({
                "title": query,
                "location": location,
                "rows": rows,
                "proxy": {
                    "useApifyProxy": true,
                    "apifyProxyGroups": ["RESIDENTIAL"],
                },
            }),
            JobProvider::Naukri => json!({
                "keyword": query,
                "maxJobs": rows,
                "freshness": "all",
                "sortBy": "relevance",
                "experience": "all",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkedin_input_carries_location_and_proxy() {
        let input = JobProvider::Linkedin.run_input("rust, backend", "india", 15);
        assert_eq!(input["title"], "rust, backend");
        assert_eq!(input["location"], "india");
        assert_eq!(input["rows"], 15);
        assert_eq!(input["proxy"]["apifyProxyGroups"][0], "RESIDENTIAL");
    }

    #[test]
    fn test_naukri_input_uses_fixed_filters() {
        let input = JobProvider::Naukri.run_input("python", "india", 20);
        assert_eq!(input["keyword"], "python");
        assert_eq!(input["maxJobs"], 20);
        assert_eq!(input["freshness"], "all");
        assert_eq!(input["sortBy"], "relevance");
        assert_eq!(input["experience"], "all");
        assert!(input.get("location").is_none());
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(JobProvider::Linkedin.empty_message(), "No LinkedIn jobs found.");
        assert_eq!(JobProvider::Naukri.empty_message(), "No Naukri jobs found.");
    }
}
