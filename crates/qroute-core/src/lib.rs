// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Qroute query router.
//!
//! This crate provides the trait seams, error type, and common types used
//! throughout the Qroute workspace. Every collaborator adapter implements
//! traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::QrouteError;
pub use types::{
    QueryLabel, RoutingDecision, Row, ScrapeOutcome, SearchResult, SqlOutput, non_blank,
};

pub use traits::{
    DynamicComposer, LabelPredictor, ResultSynthesizer, SqlExecutor, SqlGenerator,
    StaticResponder, WebScraper,
};
