// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the classifier, the router, and the collaborators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Routing category assigned to a query.
///
/// The set is closed. Declaration order is also the tie-break order used by
/// the classifier when two labels score identically.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum QueryLabel {
    /// Answered directly by the language model.
    Static,
    /// Answered from live web results.
    Dynamic,
    /// Translated to SQL and run against the database.
    Sql,
}

/// The (query, label) pair produced for one request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    pub query: String,
    pub label: QueryLabel,
}

/// One organic search result scraped from a results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    /// Empty when the page had no snippet for this result.
    pub snippet: String,
    /// Publication date, when the page showed one that could be parsed.
    pub date: Option<NaiveDate>,
}

/// Everything a web scrape produced for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeOutcome {
    pub results: Vec<SearchResult>,
    /// Widget data such as current weather.
    pub live_info: Option<String>,
    /// Direct answer excerpt shown above the results.
    pub featured_snippet: Option<String>,
}

impl ScrapeOutcome {
    /// True when the scrape produced nothing usable at all.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
            && non_blank(self.live_info.as_deref()).is_none()
            && non_blank(self.featured_snippet.as_deref()).is_none()
    }
}

/// Returns the string when it has any non-whitespace content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// One result row: column names mapped to JSON values.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Outcome of running a statement against the database.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlOutput {
    /// Rows returned by a query.
    Rows(Vec<Row>),
    /// Status line for statements that return no rows, or a rendered error.
    Status(String),
}

impl std::fmt::Display for SqlOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlOutput::Rows(rows) => {
                let values: Vec<serde_json::Value> = rows
                    .iter()
                    .cloned()
                    .map(serde_json::Value::Object)
                    .collect();
                write!(f, "{}", serde_json::Value::Array(values))
            }
            SqlOutput::Status(message) => f.write_str(message),
        }
    }
}
