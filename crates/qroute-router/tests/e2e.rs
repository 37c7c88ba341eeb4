// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end routing with the trained reference classifier.
//!
//! Language models and the web are mocked; the `sql` path runs against a real
//! in-memory SQLite database.

use std::sync::Arc;

use qroute_classifier::QueryClassifier;
use qroute_config::QrouteConfig;
use qroute_core::{QueryLabel, ScrapeOutcome, SearchResult, SqlExecutor};
use qroute_router::{Collaborators, PriorityComposer, QueryRouter, RouterConfig};
use qroute_storage::SqliteExecutor;
use qroute_test_utils::{MockResponder, MockScraper, MockSqlGenerator, MockSynthesizer};

struct Harness {
    router: QueryRouter,
    responder: MockResponder,
    generator: MockSqlGenerator,
    scraper: MockScraper,
    synthesizer: MockSynthesizer,
    database: Arc<SqliteExecutor>,
}

impl Harness {
    async fn new(sql: &str, outcome: ScrapeOutcome) -> Self {
        let config = QrouteConfig::default();
        let classifier = QueryClassifier::from_reference_corpus(&config.classifier).unwrap();

        let database = Arc::new(SqliteExecutor::open_in_memory().await.unwrap());
        database.initialize().await.unwrap();
        database
            .execute_sql(
                "INSERT INTO users (id, name, email) VALUES \
                 (1, 'Ada', 'ada@example.com'), (2, 'Grace', 'grace@example.com'), \
                 (3, 'Linus', 'linus@example.com');",
            )
            .await
            .unwrap();

        let responder = MockResponder::with_reply("Paris is the capital of France.");
        let generator = MockSqlGenerator::with_sql(sql);
        let scraper = MockScraper::with_outcome(outcome);
        let synthesizer = MockSynthesizer::with_reply("synthesized");

        let collaborators = Collaborators {
            static_responder: Arc::new(responder.clone()),
            sql_generator: Arc::new(generator.clone()),
            sql_executor: database.clone(),
            scraper: Arc::new(scraper.clone()),
            composer: Arc::new(PriorityComposer::new(synthesizer.clone())),
        };
        let router = QueryRouter::new(
            Arc::new(classifier),
            collaborators,
            RouterConfig::from(&config),
        );

        Self {
            router,
            responder,
            generator,
            scraper,
            synthesizer,
            database,
        }
    }

    fn call_counts(&self) -> [usize; 4] {
        [
            self.responder.calls(),
            self.generator.calls(),
            self.scraper.calls(),
            self.synthesizer.calls(),
        ]
    }
}

#[tokio::test]
async fn factual_question_is_answered_directly() {
    let harness = Harness::new("SELECT 1", ScrapeOutcome::default()).await;

    let (decision, response) = harness
        .router
        .route_with_decision("What is the capital of France?")
        .await;

    assert_eq!(decision.label, QueryLabel::Static);
    assert_eq!(response, "Paris is the capital of France.");
    assert_eq!(harness.call_counts(), [1, 0, 0, 0]);
    assert_eq!(
        harness.responder.last_query().as_deref(),
        Some("What is the capital of France?")
    );
}

#[tokio::test]
async fn delete_request_runs_generated_sql() {
    let sql = "DELETE FROM users WHERE id = 3;";
    let harness = Harness::new(sql, ScrapeOutcome::default()).await;

    let (decision, response) = harness
        .router
        .route_with_decision("Delete user with ID 3")
        .await;

    assert_eq!(decision.label, QueryLabel::Sql);
    assert_eq!(response, format!("Query executed successfully: {sql}"));
    assert_eq!(harness.call_counts(), [0, 1, 0, 0]);
    assert!(
        harness
            .generator
            .last_schema()
            .is_some_and(|schema| schema.contains("users (id INT"))
    );

    let remaining = harness
        .database
        .execute_sql("SELECT id FROM users ORDER BY id")
        .await
        .unwrap();
    assert_eq!(remaining.to_string(), r#"[{"id":1},{"id":2}]"#);
}

#[tokio::test]
async fn listing_request_returns_rows() {
    let harness = Harness::new(
        "SELECT name FROM users ORDER BY id",
        ScrapeOutcome::default(),
    )
    .await;

    let (decision, response) = harness
        .router
        .route_with_decision("List all orders in the database")
        .await;

    assert_eq!(decision.label, QueryLabel::Sql);
    assert_eq!(
        response,
        r#"[{"name":"Ada"},{"name":"Grace"},{"name":"Linus"}]"#
    );
}

#[tokio::test]
async fn weather_question_returns_live_info() {
    let outcome = ScrapeOutcome {
        results: vec![SearchResult {
            title: "Forecast".to_string(),
            url: "https://weather.example".to_string(),
            snippet: "Mild".to_string(),
            date: None,
        }],
        live_info: Some("Live Weather: 18°C, Partly cloudy".to_string()),
        featured_snippet: None,
    };
    let harness = Harness::new("SELECT 1", outcome).await;

    let (decision, response) = harness
        .router
        .route_with_decision("What is the weather today?")
        .await;

    assert_eq!(decision.label, QueryLabel::Dynamic);
    assert_eq!(response, "Live Weather: 18°C, Partly cloudy");
    assert_eq!(harness.call_counts(), [0, 0, 1, 0]);
}

#[tokio::test]
async fn dynamic_question_without_data_falls_back() {
    let harness = Harness::new("SELECT 1", ScrapeOutcome::default()).await;

    let response = harness.router.route("What is the weather today?").await;

    assert_eq!(response, qroute_router::FALLBACK_MESSAGE);
    assert_eq!(harness.call_counts(), [0, 0, 1, 0]);
}

#[tokio::test]
async fn invalid_generated_sql_is_reported_not_raised() {
    let harness = Harness::new("DELETE FROM customers WHERE id = 3;", ScrapeOutcome::default())
        .await;

    let response = harness.router.route("Delete user with ID 3").await;

    assert!(response.starts_with("Database error: "), "got: {response}");
}
