// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Qroute query router.

use thiserror::Error;

/// The primary error type used across all Qroute collaborator traits and core operations.
#[derive(Debug, Error)]
pub enum QrouteError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The training corpus cannot produce a usable classifier.
    #[error("degenerate corpus: {0}")]
    Corpus(String),

    /// Relational store errors (connection failure, schema setup).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// LLM provider errors (API failure, unreachable host, empty completion).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Web search page could not be fetched or read.
    #[error("scrape error: {message}")]
    Scrape {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QrouteError {
    /// Short, user-facing summary of the failure. Detail stays in the logs.
    pub fn summary(&self) -> &'static str {
        match self {
            QrouteError::Config(_) => "the service is misconfigured",
            QrouteError::Corpus(_) => "the query classifier is unavailable",
            QrouteError::Storage { .. } => "the database is unavailable",
            QrouteError::Provider { .. } => "the language model did not answer",
            QrouteError::Scrape { .. } => "live data could not be fetched",
            QrouteError::Timeout { .. } => "the request took too long",
            QrouteError::Internal(_) => "something went wrong",
        }
    }
}
