// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification for the Qroute router.
//!
//! This crate provides:
//! - [`QueryClassifier`]: TF-IDF features fed to multinomial naive Bayes,
//!   trained once at startup and immutable afterwards
//! - [`TRAINING_DATA`]: the labeled reference corpus compiled into the binary
//!
//! The classifier implements [`qroute_core::LabelPredictor`], which is the
//! only thing the router depends on.

pub mod classifier;
pub mod corpus;
pub mod naive_bayes;
pub mod tfidf;

pub use classifier::{Classification, LabelConflict, QueryClassifier, find_label_conflicts};
pub use corpus::{LabeledExample, TRAINING_DATA};
