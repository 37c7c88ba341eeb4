// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Natural-language-to-SQL translation and execution.

use async_trait::async_trait;

use crate::error::QrouteError;
use crate::types::SqlOutput;

/// Translates a natural-language request into one SQL statement.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    /// `schema` is a plain-text description of the available tables.
    async fn generate_sql(&self, query: &str, schema: &str) -> Result<String, QrouteError>;
}

/// Runs a generated statement against the relational store.
///
/// Database errors are expected to be rendered into [`SqlOutput::Status`]
/// by the implementation. `Err` is reserved for the store being unreachable.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute_sql(&self, sql: &str) -> Result<SqlOutput, QrouteError>;
}
