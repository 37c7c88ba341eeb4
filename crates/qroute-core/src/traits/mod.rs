// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the router and the collaborators it dispatches to.
//!
//! Async collaborators use `#[async_trait]` for dynamic dispatch compatibility,
//! so the router can hold them as `Arc<dyn Trait>`.

pub mod classify;
pub mod responder;
pub mod sql;
pub mod web;

pub use classify::LabelPredictor;
pub use responder::StaticResponder;
pub use sql::{SqlExecutor, SqlGenerator};
pub use web::{DynamicComposer, ResultSynthesizer, WebScraper};
