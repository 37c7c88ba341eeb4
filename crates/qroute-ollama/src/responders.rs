// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator adapters that answer through an Ollama model.

use async_trait::async_trait;
use qroute_core::{QrouteError, ResultSynthesizer, SearchResult, SqlGenerator, StaticResponder};
use tracing::info;

use crate::client::OllamaClient;
use crate::sql_text::extract_sql;

/// Answers `static` queries directly.
#[derive(Debug, Clone)]
pub struct OllamaStaticResponder {
    client: OllamaClient,
    model: String,
}

impl OllamaStaticResponder {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

fn static_prompt(query: &str) -> String {
    format!(
        "You are a polite chatbot. Provide a short and sweet answer to the following query:\n{query}"
    )
}

#[async_trait]
impl StaticResponder for OllamaStaticResponder {
    async fn respond(&self, query: &str) -> Result<String, QrouteError> {
        info!(model = %self.model, "generating static response");
        self.client.generate(&self.model, &static_prompt(query)).await
    }
}

/// Translates `sql` queries into one SQL statement.
#[derive(Debug, Clone)]
pub struct OllamaSqlGenerator {
    client: OllamaClient,
    model: String,
}

impl OllamaSqlGenerator {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

fn sql_prompt(query: &str, schema: &str) -> String {
    format!(
        "You are an AI trained to convert natural language into SQL queries.\n\
         The database is SQLite. The schema is as follows:\n\
         {schema}\n\
         Convert the following user query into SQL:\n\
         \"{query}\"\n\
         Reply with a single SQL statement and nothing else."
    )
}

#[async_trait]
impl SqlGenerator for OllamaSqlGenerator {
    async fn generate_sql(&self, query: &str, schema: &str) -> Result<String, QrouteError> {
        let reply = self
            .client
            .generate(&self.model, &sql_prompt(query, schema))
            .await?;
        let sql = extract_sql(&reply)?;
        info!(model = %self.model, sql = %sql, "generated SQL");
        Ok(sql)
    }
}

/// Summarizes live search results for `dynamic` queries.
#[derive(Debug, Clone)]
pub struct OllamaSynthesizer {
    client: OllamaClient,
    model: String,
}

impl OllamaSynthesizer {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

/// One `Title/Snippet/URL` block per result.
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("Title: {}\nSnippet: {}\nURL: {}", r.title, r.snippet, r.url))
        .collect::<Vec<_>>()
        .join("\n")
}

fn live_data_prompt(query: &str, results: &[SearchResult]) -> String {
    format!(
        "You are a helpful chatbot. Your role is to give accurate, real-time answers \
         based on the most recent data.\n\
         Rules:\n\
         1. Prioritize live data provided.\n\
         2. Use the latest info from the data fed to you.\n\
         3. Keep answers crisp, short, and accurate.\n\
         User's question: {query}\n\
         Most recent data:\n{}",
        format_results(results)
    )
}

#[async_trait]
impl ResultSynthesizer for OllamaSynthesizer {
    async fn synthesize(
        &self,
        query: &str,
        results: &[SearchResult],
    ) -> Result<String, QrouteError> {
        info!(model = %self.model, results = results.len(), "synthesizing live answer");
        self.client
            .generate(&self.model, &live_data_prompt(query, results))
            .await
    }
}
