// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fetching search results pages over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use qroute_config::model::ScraperConfig;
use qroute_core::{QrouteError, ScrapeOutcome, WebScraper};
use reqwest::Url;
use tracing::{error, info};

use crate::parse::{PageLimits, parse_results_page};

/// [`WebScraper`] that reads one results page per query.
///
/// Never fails: fetch errors, timeouts, and error statuses are logged and
/// produce an empty outcome.
#[derive(Debug, Clone)]
pub struct SearchScraper {
    client: reqwest::Client,
    search_url: Url,
    timeout: Duration,
    limits: PageLimits,
}

impl SearchScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self, QrouteError> {
        let search_url = Url::parse(&config.search_url)
            .map_err(|e| QrouteError::Config(format!("invalid scraper.search_url: {e}")))?;
        let timeout = Duration::from_secs(config.wait_timeout_secs);
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(timeout)
            .build()
            .map_err(|e| QrouteError::Scrape {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            search_url,
            timeout,
            limits: PageLimits {
                max_results: config.max_results,
                recent_days: config.recent_days,
            },
        })
    }

    /// Results page URL for `query`.
    pub fn page_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    async fn fetch(&self, query: &str) -> Result<String, QrouteError> {
        let response = self
            .client
            .get(self.page_url(query))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QrouteError::Scrape {
                message: format!("search page returned {status}"),
                source: None,
            });
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> QrouteError {
        if e.is_timeout() {
            QrouteError::Timeout {
                duration: self.timeout,
            }
        } else {
            QrouteError::Scrape {
                message: format!("search page fetch failed: {e}"),
                source: Some(Box::new(e)),
            }
        }
    }
}

#[async_trait]
impl WebScraper for SearchScraper {
    async fn scrape(&self, query: &str) -> ScrapeOutcome {
        info!("starting web scrape");
        match self.fetch(query).await {
            Ok(html) => {
                let outcome =
                    parse_results_page(&html, query, Local::now().date_naive(), self.limits);
                info!(results = outcome.results.len(), "web scrape finished");
                outcome
            }
            Err(e) => {
                error!(error = %e, "web scrape failed");
                ScrapeOutcome::default()
            }
        }
    }
}
