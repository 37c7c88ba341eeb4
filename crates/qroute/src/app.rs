// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup wiring and the one-shot commands.

use std::fmt::Write as _;
use std::sync::Arc;

use qroute_classifier::{Classification, QueryClassifier};
use qroute_config::QrouteConfig;
use qroute_core::QrouteError;
use qroute_ollama::{OllamaClient, OllamaSqlGenerator, OllamaStaticResponder, OllamaSynthesizer};
use qroute_router::{Collaborators, PriorityComposer, QueryRouter, RouterConfig};
use qroute_scraper::SearchScraper;
use qroute_storage::SqliteExecutor;
use tracing::info;

/// Reply printed instead of routing blank input.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query!";

/// Train the classifier and connect every collaborator.
///
/// Runs once per process; the classifier is never refitted afterwards.
pub async fn build_router(config: &QrouteConfig) -> Result<QueryRouter, QrouteError> {
    let classifier = QueryClassifier::from_reference_corpus(&config.classifier)?;
    info!(
        examples = classifier.example_count(),
        vocabulary = classifier.vocabulary_len(),
        "classifier trained"
    );

    let ollama = OllamaClient::new(&config.ollama)?;
    let executor = SqliteExecutor::open(&config.database).await?;
    let scraper = SearchScraper::new(&config.scraper)?;

    let collaborators = Collaborators {
        static_responder: Arc::new(OllamaStaticResponder::new(
            ollama.clone(),
            &config.ollama.static_model,
        )),
        sql_generator: Arc::new(OllamaSqlGenerator::new(
            ollama.clone(),
            &config.ollama.sql_model,
        )),
        sql_executor: Arc::new(executor),
        scraper: Arc::new(scraper),
        composer: Arc::new(PriorityComposer::new(OllamaSynthesizer::new(
            ollama,
            &config.ollama.dynamic_model,
        ))),
    };

    Ok(QueryRouter::new(
        Arc::new(classifier),
        collaborators,
        RouterConfig::from(config),
    ))
}

/// `qroute ask`: route one query and print the reply.
pub async fn run_ask(config: &QrouteConfig, query: &str) -> Result<(), QrouteError> {
    let query = query.trim();
    if query.is_empty() {
        println!("{EMPTY_QUERY_MESSAGE}");
        return Ok(());
    }

    let router = build_router(config).await?;
    println!("{}", router.route(query).await);
    Ok(())
}

/// `qroute classify`: print the predicted label and the scores behind it.
pub fn run_classify(config: &QrouteConfig, query: &str) -> Result<(), QrouteError> {
    let classifier = QueryClassifier::from_reference_corpus(&config.classifier)?;
    print!("{}", format_classification(&classifier.classify(query)));
    Ok(())
}

fn format_classification(classification: &Classification) -> String {
    let mut out = format!("label: {}\n", classification.label);
    for (label, score) in &classification.scores {
        let _ = writeln!(out, "  {:<8} {score:.4}", label.to_string());
    }
    out
}
