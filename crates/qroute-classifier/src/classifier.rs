// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trained query classifier: TF-IDF features into multinomial naive Bayes.
//!
//! Built once from a labeled corpus, then immutable. Prediction is pure and
//! never fails: text with no known terms falls back to the label priors.

use std::collections::HashMap;

use qroute_config::model::ClassifierConfig;
use qroute_core::{LabelPredictor, QrouteError, QueryLabel};
use tracing::{debug, info, warn};

use crate::corpus::TRAINING_DATA;
use crate::naive_bayes::MultinomialNb;
use crate::tfidf::{TfidfVectorizer, tokenize};

/// A prediction together with the per-label scores that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Winning label.
    pub label: QueryLabel,
    /// Joint log likelihood per label, in label declaration order.
    pub scores: Vec<(QueryLabel, f64)>,
}

/// Two training examples with the same normalized text but different labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConflict {
    pub normalized: String,
    pub first: QueryLabel,
    pub second: QueryLabel,
}

/// Query classifier fitted on a labeled corpus.
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    vectorizer: TfidfVectorizer,
    model: MultinomialNb,
    examples: usize,
}

impl QueryClassifier {
    /// Fit a classifier on `corpus`.
    ///
    /// Fails when the corpus is empty, has fewer than two distinct labels,
    /// or yields no tokens at all.
    pub fn build<S: AsRef<str>>(
        corpus: &[(S, QueryLabel)],
        config: &ClassifierConfig,
    ) -> Result<Self, QrouteError> {
        if corpus.is_empty() {
            return Err(QrouteError::Corpus("training corpus is empty".to_string()));
        }

        for conflict in find_label_conflicts(corpus, config.lowercase) {
            warn!(
                query = %conflict.normalized,
                first = %conflict.first,
                second = %conflict.second,
                "training examples with identical text carry conflicting labels"
            );
        }

        let documents: Vec<&str> = corpus.iter().map(|(query, _)| query.as_ref()).collect();
        let vectorizer = TfidfVectorizer::fit(&documents, config.lowercase, config.sublinear_tf);
        if vectorizer.vocabulary_len() == 0 {
            return Err(QrouteError::Corpus(
                "training corpus produced an empty vocabulary".to_string(),
            ));
        }

        let samples: Vec<_> = corpus
            .iter()
            .map(|(query, label)| (vectorizer.transform(query.as_ref()), *label))
            .collect();
        let model = MultinomialNb::fit(&samples, vectorizer.vocabulary_len(), config.alpha)?;

        for label in model.labels() {
            let count = corpus.iter().filter(|(_, l)| l == label).count();
            info!(%label, count, "classifier label examples");
        }
        info!(
            examples = corpus.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "query classifier trained"
        );

        Ok(Self {
            vectorizer,
            model,
            examples: corpus.len(),
        })
    }

    /// Fit a classifier on the built-in reference corpus.
    pub fn from_reference_corpus(config: &ClassifierConfig) -> Result<Self, QrouteError> {
        Self::build(TRAINING_DATA, config)
    }

    /// Predict the routing label for `query`.
    pub fn predict(&self, query: &str) -> QueryLabel {
        let label = self.model.predict(&self.vectorizer.transform(query));
        debug!(%label, "query classified");
        label
    }

    /// Per-label joint log likelihoods for `query`.
    pub fn scores(&self, query: &str) -> Vec<(QueryLabel, f64)> {
        self.model
            .joint_log_likelihood(&self.vectorizer.transform(query))
    }

    /// Predict and keep the scores.
    pub fn classify(&self, query: &str) -> Classification {
        let x = self.vectorizer.transform(query);
        Classification {
            label: self.model.predict(&x),
            scores: self.model.joint_log_likelihood(&x),
        }
    }

    /// Labels this classifier can emit.
    pub fn labels(&self) -> &[QueryLabel] {
        self.model.labels()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    pub fn example_count(&self) -> usize {
        self.examples
    }
}

impl LabelPredictor for QueryClassifier {
    fn predict(&self, query: &str) -> QueryLabel {
        QueryClassifier::predict(self, query)
    }
}

/// Find examples whose token sequences match an earlier example with a
/// different label. Each conflicting pair is reported once per later example.
pub fn find_label_conflicts<S: AsRef<str>>(
    corpus: &[(S, QueryLabel)],
    lowercase: bool,
) -> Vec<LabelConflict> {
    let mut seen: HashMap<String, QueryLabel> = HashMap::new();
    let mut conflicts = Vec::new();
    for (query, label) in corpus {
        let normalized = tokenize(query.as_ref(), lowercase).join(" ");
        match seen.get(&normalized) {
            Some(first) if first != label => conflicts.push(LabelConflict {
                normalized,
                first: *first,
                second: *label,
            }),
            Some(_) => {}
            None => {
                seen.insert(normalized, *label);
            }
        }
    }
    conflicts
}
