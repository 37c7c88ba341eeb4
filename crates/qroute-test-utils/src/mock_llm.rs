// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Language-model collaborators with canned replies.
//!
//! A mock built with `failing()` returns a provider error on every call,
//! after recording the call.

use async_trait::async_trait;
use qroute_core::{QrouteError, ResultSynthesizer, SearchResult, SqlGenerator, StaticResponder};

use crate::call_log::CallLog;
use crate::mock_failure;

/// [`StaticResponder`] returning one fixed answer.
#[derive(Debug, Clone)]
pub struct MockResponder {
    reply: Option<String>,
    log: CallLog,
}

impl MockResponder {
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

    pub fn last_query(&self) -> Option<String> {
        self.log.last_arg(0)
    }
}

#[async_trait]
impl StaticResponder for MockResponder {
    async fn respond(&self, query: &str) -> Result<String, QrouteError> {
        self.log.record(&[query]);
        self.reply.clone().ok_or_else(|| mock_failure("responder"))
    }
}

/// [`SqlGenerator`] returning one fixed statement.
#[derive(Debug, Clone)]
pub struct MockSqlGenerator {
    sql: Option<String>,
    log: CallLog,
}

impl MockSqlGenerator {
    pub fn with_sql(sql: &str) -> Self {
        Self {
            sql: Some(sql.to_string()),
            log: CallLog::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            sql: None,
            log: CallLog::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.len()
    }

    pub fn last_query(&self) -> Option<String> {
        self.log.last_arg(0)
    }

    pub fn last_schema(&self) -> Option<String> {
        self.log.last_arg(1)
    }
}

#[async_trait]
impl SqlGenerator for MockSqlGenerator {
    async fn generate_sql(&self, query: &str, schema: &str) -> Result<String, QrouteError> {
        self.log.record(&[query, schema]);
        self.sql.clone().ok_or_else(|| mock_failure("sql generator"))
    }
}

/// [`ResultSynthesizer`] returning one fixed summary.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    reply: Option<String>,
    log: CallLog,
}

impl MockSynthesizer {
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

    /// How many search results the most recent call received.
    pub fn last_result_count(&self) -> Option<usize> {
        self.log.last_arg(1).and_then(|n| n.parse().ok())
    }
}

#[async_trait]
impl ResultSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        query: &str,
        results: &[SearchResult],
    ) -> Result<String, QrouteError> {
        self.log.record(&[query, &results.len().to_string()]);
        self.reply.clone().ok_or_else(|| mock_failure("synthesizer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responder_records_and_replies() {
        let mock = MockResponder::with_reply("hi");
        assert_eq!(mock.respond("hello").await.unwrap(), "hi");
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.last_query().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn failing_generator_still_records() {
        let mock = MockSqlGenerator::failing();
        assert!(mock.generate_sql("q", "schema").await.is_err());
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.last_schema().as_deref(), Some("schema"));
    }
}
