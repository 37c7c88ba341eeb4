// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query routing for the Qroute chatbot.
//!
//! This crate provides:
//! - [`QueryRouter`]: classifies a query and dispatches it to exactly one of
//!   the static, dynamic, or SQL collaborators
//! - [`PriorityComposer`]: builds the `dynamic` answer from scraped data
//!
//! The router depends only on the traits in `qroute-core`, so every
//! collaborator can be swapped for a mock in tests.

pub mod compose;
pub mod router;

pub use compose::{FALLBACK_MESSAGE, PriorityComposer};
pub use router::{Collaborators, QueryRouter, RouterConfig, render_failure};
