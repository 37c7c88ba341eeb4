// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Answer composition for `dynamic` queries.
//!
//! Priority: featured snippet verbatim > live widget data verbatim >
//! language-model synthesis over the results > fixed fallback message.

use async_trait::async_trait;
use qroute_core::{DynamicComposer, QrouteError, ResultSynthesizer, ScrapeOutcome, non_blank};
use tracing::debug;

/// Returned when a scrape produced nothing to answer from.
pub const FALLBACK_MESSAGE: &str = "Sorry, I couldn't find any relevant live data.";

/// [`DynamicComposer`] that prefers scraped answers over synthesis.
pub struct PriorityComposer<S> {
    synthesizer: S,
}

impl<S: ResultSynthesizer> PriorityComposer<S> {
    pub fn new(synthesizer: S) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl<S: ResultSynthesizer> DynamicComposer for PriorityComposer<S> {
    async fn compose(&self, query: &str, outcome: &ScrapeOutcome) -> Result<String, QrouteError> {
        if let Some(snippet) = non_blank(outcome.featured_snippet.as_deref()) {
            debug!("answering from featured snippet");
            return Ok(snippet.to_string());
        }
        if let Some(live) = non_blank(outcome.live_info.as_deref()) {
            debug!("answering from live info");
            return Ok(live.to_string());
        }
        if !outcome.results.is_empty() {
            debug!(results = outcome.results.len(), "synthesizing from search results");
            return self.synthesizer.synthesize(query, &outcome.results).await;
        }
        Ok(FALLBACK_MESSAGE.to_string())
    }
}
