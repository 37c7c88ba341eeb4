// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Term-frequency / inverse-document-frequency feature extraction.
//!
//! Tokens are runs of two or more word characters. IDF is smoothed as if one
//! extra document contained every term, so no weight is ever zero or infinite:
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`. Vectors are L2-normalised.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Sparse feature vector: `(feature index, weight)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Split text into tokens, optionally lowercasing first.
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    let text = if lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    TOKEN_PATTERN
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Fitted TF-IDF vocabulary and term weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term to feature index; indices follow lexicographic term order.
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    lowercase: bool,
    sublinear_tf: bool,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and document frequencies from `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S], lowercase: bool, sublinear_tf: bool) -> Self {
        let tokenized: Vec<BTreeSet<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref(), lowercase).into_iter().collect())
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &tokenized {
            for term in terms {
                *document_frequency.entry(term.as_str()).or_default() += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
        }

        Self {
            vocabulary,
            idf,
            lowercase,
            sublinear_tf,
        }
    }

    /// Number of distinct terms seen at fit time.
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    /// IDF weight of a fitted term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }

    /// Map text to its normalised TF-IDF vector. Unknown terms are dropped;
    /// text with no known terms maps to the empty vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(text, self.lowercase) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_default() += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (index, tf * self.idf[index])
            })
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn tokens_are_two_or_more_word_chars() {
        assert_eq!(
            tokenize("What’s the I/O of x2?", true),
            vec!["what", "the", "of", "x2"]
        );
    }

    #[test]
    fn tokenize_respects_lowercase_flag() {
        assert_eq!(tokenize("Delete USER", false), vec!["Delete", "USER"]);
        assert_eq!(tokenize("Delete USER", true), vec!["delete", "user"]);
    }

    #[test]
    fn idf_is_smoothed() {
        let v = TfidfVectorizer::fit(&["apple banana", "apple"], true, false);
        assert_eq!(v.vocabulary_len(), 2);
        assert!((v.idf("apple").unwrap() - 1.0).abs() < EPS);
        assert!((v.idf("banana").unwrap() - (1.5f64.ln() + 1.0)).abs() < EPS);
        assert!(v.idf("cherry").is_none());
    }

    #[test]
    fn transform_is_l2_normalised() {
        let v = TfidfVectorizer::fit(&["apple banana", "apple"], true, false);
        let x = v.transform("apple banana");
        assert_eq!(x.len(), 2);
        assert!((x[0].1 - 0.579739).abs() < EPS);
        assert!((x[1].1 - 0.814802).abs() < EPS);
        let norm: f64 = x.iter().map(|(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < EPS);
    }

    #[test]
    fn unknown_terms_contribute_nothing() {
        let v = TfidfVectorizer::fit(&["apple banana", "apple"], true, false);
        assert!(v.transform("cherry durian").is_empty());
        assert!(v.transform("").is_empty());
        assert_eq!(v.transform("apple cherry"), vec![(0, 1.0)]);
    }

    #[test]
    fn sublinear_tf_dampens_repeats() {
        let raw = TfidfVectorizer::fit(&["apple banana", "apple"], true, false);
        let damped = TfidfVectorizer::fit(&["apple banana", "apple"], true, true);
        let text = "banana banana banana apple";
        // banana's share of the vector shrinks when repeats are dampened
        assert!(damped.transform(text)[1].1 < raw.transform(text)[1].1);
    }
}
