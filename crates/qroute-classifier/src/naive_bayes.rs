// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multinomial naive Bayes over sparse TF-IDF vectors.

use qroute_core::{QrouteError, QueryLabel};

use crate::tfidf::SparseVector;

/// Per-label log priors and smoothed log term likelihoods.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Labels present in the training data, in declaration order. Never empty.
    labels: Vec<QueryLabel>,
    log_priors: Vec<f64>,
    /// `feature_log_probs[label][feature]`.
    feature_log_probs: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit on labeled vectors over `n_features` features.
    ///
    /// Requires at least two distinct labels.
    pub fn fit(
        samples: &[(SparseVector, QueryLabel)],
        n_features: usize,
        alpha: f64,
    ) -> Result<Self, QrouteError> {
        let mut labels: Vec<QueryLabel> = samples.iter().map(|(_, label)| *label).collect();
        labels.sort();
        labels.dedup();
        if labels.len() < 2 {
            return Err(QrouteError::Corpus(format!(
                "need at least two distinct labels, found {}",
                labels.len()
            )));
        }

        let mut class_counts = vec![0usize; labels.len()];
        let mut feature_counts = vec![vec![0.0f64; n_features]; labels.len()];
        for (vector, label) in samples {
            // labels came from samples, so the search always succeeds
            let row = labels.binary_search(label).unwrap_or_default();
            class_counts[row] += 1;
            for &(feature, weight) in vector {
                feature_counts[row][feature] += weight;
            }
        }

        let total = samples.len() as f64;
        let log_priors = class_counts
            .iter()
            .map(|&count| (count as f64 / total).ln())
            .collect();

        let feature_log_probs = feature_counts
            .into_iter()
            .map(|counts| {
                let denominator = (counts.iter().sum::<f64>() + alpha * n_features as f64).ln();
                counts
                    .into_iter()
                    .map(|count| (count + alpha).ln() - denominator)
                    .collect()
            })
            .collect();

        Ok(Self {
            labels,
            log_priors,
            feature_log_probs,
        })
    }

    /// Labels the model can emit.
    pub fn labels(&self) -> &[QueryLabel] {
        &self.labels
    }

    /// Joint log likelihood `log P(label) + sum_t x_t log P(t | label)` per label.
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Vec<(QueryLabel, f64)> {
        self.labels
            .iter()
            .zip(&self.log_priors)
            .zip(&self.feature_log_probs)
            .map(|((label, prior), log_probs)| {
                let evidence: f64 = x
                    .iter()
                    .map(|&(feature, weight)| weight * log_probs[feature])
                    .sum();
                (*label, prior + evidence)
            })
            .collect()
    }

    /// Highest-scoring label. On an exact tie the earlier label wins.
    pub fn predict(&self, x: &SparseVector) -> QueryLabel {
        let mut scores = self.joint_log_likelihood(x).into_iter();
        // labels is never empty, so neither is scores
        let mut best = scores.next().unwrap_or((self.labels[0], f64::NEG_INFINITY));
        for (label, score) in scores {
            if score > best.1 {
                best = (label, score);
            }
        }
        best.0
    }
}
