// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use qroute_core::{LabelPredictor, QueryLabel};

/// Predicts the same label for every query.
#[derive(Debug, Clone, Copy)]
pub struct FixedLabelPredictor(pub QueryLabel);

impl LabelPredictor for FixedLabelPredictor {
    fn predict(&self, _query: &str) -> QueryLabel {
        self.0
    }
}
