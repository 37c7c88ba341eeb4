// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama-backed collaborators for the Qroute router.
//!
//! - [`OllamaClient`]: non-streaming `/api/generate` client with transient retry
//! - [`OllamaStaticResponder`]: direct answers for `static` queries
//! - [`OllamaSqlGenerator`]: natural language to one SQL statement
//! - [`OllamaSynthesizer`]: short answers grounded in scraped search results

pub mod client;
pub mod responders;
pub mod sql_text;
pub mod types;

pub use client::OllamaClient;
pub use responders::{OllamaSqlGenerator, OllamaStaticResponder, OllamaSynthesizer};
pub use sql_text::extract_sql;
