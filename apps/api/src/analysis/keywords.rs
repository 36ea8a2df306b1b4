//! Search keyword normalization.
//!
//! The model is asked for exactly five comma-separated terms but does not always comply.
//! Output is cleaned up here: newlines removed, terms trimmed, blanks and
//! case-insensitive repeats dropped, and the list cut to `MAX_KEYWORDS`. Short lists
//! are kept as they are.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

pub const MAX_KEYWORDS: usize = 5;

/// Comma-separated query term accepted unchanged by both job providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchKeywords(String);

impl SearchKeywords {
    /// Returns `None` when the input holds no usable term.
    pub fn parse(raw: &str) -> Option<Self> {
        let flattened = raw.replace(['\r', '\n'], " ");
        let mut seen = HashSet::new();
        let terms: Vec<String> = flattened
            .split(',')
            .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.to_lowercase()))
            .take(MAX_KEYWORDS)
            .collect();

        if terms.is_empty() {
            None
        } else {
            Some(Self(terms.join(", ")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.split(", ")
    }
}

impl fmt::Display for SearchKeywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
