// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Direct language-model answers for `static` queries.

use async_trait::async_trait;

use crate::error::QrouteError;

/// Answers a query from the language model alone, without live data.
#[async_trait]
pub trait StaticResponder: Send + Sync {
    async fn respond(&self, query: &str) -> Result<String, QrouteError>;
}
