// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live-web collaborators for `dynamic` queries.

use async_trait::async_trait;

use crate::error::QrouteError;
use crate::types::{ScrapeOutcome, SearchResult};

/// Fetches live search data for a query.
///
/// Infallible by contract: a failed fetch degrades to an empty outcome.
#[async_trait]
pub trait WebScraper: Send + Sync {
    async fn scrape(&self, query: &str) -> ScrapeOutcome;
}

/// Turns scraped data into the final answer for a `dynamic` query.
#[async_trait]
pub trait DynamicComposer: Send + Sync {
    async fn compose(&self, query: &str, outcome: &ScrapeOutcome) -> Result<String, QrouteError>;
}

/// Summarizes a list of search results into an answer with a language model.
#[async_trait]
pub trait ResultSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        query: &str,
        results: &[SearchResult],
    ) -> Result<String, QrouteError>;
}
