// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live-web collaborators with canned data.

use async_trait::async_trait;
use qroute_core::{DynamicComposer, QrouteError, ScrapeOutcome, WebScraper};

use crate::call_log::CallLog;
use crate::mock_failure;

/// [`WebScraper`] returning one fixed outcome.
#[derive(Debug, Clone)]
pub struct MockScraper {
    outcome: ScrapeOutcome,
    log: CallLog,
}

impl MockScraper {
    pub fn with_outcome(outcome: ScrapeOutcome) -> Self {
        Self {
            outcome,
            log: CallLog::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.len()
    }

    pub fn last_query(&self) -> Option<String> {
        self.log.last_arg(0)
    }
}

#[async_trait]
impl WebScraper for MockScraper {
    async fn scrape(&self, query: &str) -> ScrapeOutcome {
        self.log.record(&[query]);
        self.outcome.clone()
    }
}

/// [`DynamicComposer`] returning one fixed answer regardless of the outcome.
#[derive(Debug, Clone)]
pub struct MockComposer {
    reply: Option<String>,
    log: CallLog,
}

impl MockComposer {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            log: CallLog::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            log: CallLog::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.len()
    }
}

#[async_trait]
impl DynamicComposer for MockComposer {
    async fn compose(&self, query: &str, _outcome: &ScrapeOutcome) -> Result<String, QrouteError> {
        self.log.record(&[query]);
        self.reply.clone().ok_or_else(|| mock_failure("composer"))
    }
}
