// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Qroute router and end-to-end tests.
//!
//! Every mock is cheap to clone; clones share one call log, so a test can
//! hand a clone to the router and inspect the original afterwards.
//!
//! # Components
//!
//! - [`FixedLabelPredictor`] - Predictor that ignores its input
//! - [`MockResponder`], [`MockSqlGenerator`], [`MockSynthesizer`] - Language-model stand-ins
//! - [`MockExecutor`] - SQL executor with a canned output
//! - [`MockScraper`], [`MockComposer`] - Live-web stand-ins

pub mod call_log;
pub mod mock_llm;
pub mod mock_sql;
pub mod mock_web;
pub mod predictor;

pub use call_log::CallLog;
pub use mock_llm::{MockResponder, MockSqlGenerator, MockSynthesizer};
pub use mock_sql::MockExecutor;
pub use mock_web::{MockComposer, MockScraper};
pub use predictor::FixedLabelPredictor;

use qroute_core::QrouteError;

/// The error every failing mock returns.
pub fn mock_failure(what: &str) -> QrouteError {
    QrouteError::Provider {
        message: format!("mock {what} failure"),
        source: None,
    }
}
