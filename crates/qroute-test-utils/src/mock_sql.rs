// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQL executor with a canned output.

use async_trait::async_trait;
use qroute_core::{QrouteError, SqlExecutor, SqlOutput};

use crate::call_log::CallLog;

/// [`SqlExecutor`] that records statements and returns one fixed output.
#[derive(Debug, Clone)]
pub struct MockExecutor {
    output: Option<SqlOutput>,
    log: CallLog,
}

impl MockExecutor {
    pub fn with_output(output: SqlOutput) -> Self {
        Self {
            output: Some(output),
            log: CallLog::new(),
        }
    }

    /// Executor whose store is unreachable.
    pub fn unavailable() -> Self {
        Self {
            output: None,
            log: CallLog::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.len()
    }

    pub fn last_sql(&self) -> Option<String> {
        self.log.last_arg(0)
    }
}

#[async_trait]
impl SqlExecutor for MockExecutor {
    async fn execute_sql(&self, sql: &str) -> Result<SqlOutput, QrouteError> {
        self.log.record(&[sql]);
        self.output.clone().ok_or_else(|| QrouteError::Storage {
            source: "mock database unavailable".into(),
        })
    }
}
