// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live search data for the `dynamic` path of the Qroute router.
//!
//! [`SearchScraper`] fetches a results page and reads organic results, the
//! weather widget, and the featured snippet out of it with CSS selectors.

pub mod parse;
pub mod search;

pub use parse::{PageLimits, parse_date, parse_results_page};
pub use search::SearchScraper;
