// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prediction contract consumed by the router.

use crate::types::QueryLabel;

/// Maps a raw query to exactly one routing label.
///
/// Implementations must be pure: the same query always yields the same label.
pub trait LabelPredictor: Send + Sync {
    fn predict(&self, query: &str) -> QueryLabel;
}
