// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label-driven query dispatch.
//!
//! Each query is classified once and sent down exactly one path:
//! `static` > static responder, `dynamic` > scraper then composer,
//! `sql` > generator then executor. No path falls back to another and
//! nothing is retried here. Failures are rendered into the reply text.

use std::sync::Arc;

use qroute_config::model::QrouteConfig;
use qroute_core::{
    DynamicComposer, LabelPredictor, QrouteError, QueryLabel, RoutingDecision, SqlExecutor,
    SqlGenerator, StaticResponder, WebScraper,
};
use tracing::{debug, error, info};

/// Settings the router passes through to its collaborators.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Plain-text schema handed to the SQL generator.
    pub schema: String,
}

impl From<&QrouteConfig> for RouterConfig {
    fn from(config: &QrouteConfig) -> Self {
        Self {
            schema: config.database.schema.clone(),
        }
    }
}

/// The collaborators behind the three routing paths.
#[derive(Clone)]
pub struct Collaborators {
    pub static_responder: Arc<dyn StaticResponder>,
    pub sql_generator: Arc<dyn SqlGenerator>,
    pub sql_executor: Arc<dyn SqlExecutor>,
    pub scraper: Arc<dyn WebScraper>,
    pub composer: Arc<dyn DynamicComposer>,
}

/// Stateless router from query text to response text.
pub struct QueryRouter {
    predictor: Arc<dyn LabelPredictor>,
    collaborators: Collaborators,
    config: RouterConfig,
}

impl QueryRouter {
    pub fn new(
        predictor: Arc<dyn LabelPredictor>,
        collaborators: Collaborators,
        config: RouterConfig,
    ) -> Self {
        Self {
            predictor,
            collaborators,
            config,
        }
    }

    /// Classify `query` and return the response of the matching path.
    ///
    /// Never fails: collaborator errors come back as a short apology and are
    /// logged in full.
    pub async fn route(&self, query: &str) -> String {
        self.route_with_decision(query).await.1
    }

    /// Like [`route`](Self::route), also returning the routing decision.
    pub async fn route_with_decision(&self, query: &str) -> (RoutingDecision, String) {
        let label = self.predictor.predict(query);
        info!(%label, "routing query");

        let response = match self.dispatch(label, query).await {
            Ok(response) => response,
            Err(e) => render_failure(label, &e),
        };

        let decision = RoutingDecision {
            query: query.to_string(),
            label,
        };
        (decision, response)
    }

    async fn dispatch(&self, label: QueryLabel, query: &str) -> Result<String, QrouteError> {
        match label {
            QueryLabel::Static => self.collaborators.static_responder.respond(query).await,
            QueryLabel::Dynamic => {
                let outcome = self.collaborators.scraper.scrape(query).await;
                debug!(
                    results = outcome.results.len(),
                    live_info = outcome.live_info.is_some(),
                    featured_snippet = outcome.featured_snippet.is_some(),
                    "scrape finished"
                );
                self.collaborators.composer.compose(query, &outcome).await
            }
            QueryLabel::Sql => {
                let sql = self
                    .collaborators
                    .sql_generator
                    .generate_sql(query, &self.config.schema)
                    .await?;
                debug!(sql = %sql, "generated SQL");
                let output = self.collaborators.sql_executor.execute_sql(&sql).await?;
                Ok(output.to_string())
            }
        }
    }
}

/// Log a path failure in full and return the user-facing summary.
pub fn render_failure(label: QueryLabel, err: &QrouteError) -> String {
    error!(%label, error = %err, "query path failed");
    format!("Sorry, {}. Please try again later.", err.summary())
}

#[cfg(test)]
mod tests {
    use qroute_core::{ScrapeOutcome, SqlOutput};
    use qroute_test_utils::{
        FixedLabelPredictor, MockComposer, MockExecutor, MockResponder, MockScraper,
        MockSqlGenerator,
    };
    use tracing_test::traced_test;

    use super::*;

    struct Mocks {
        responder: MockResponder,
        generator: MockSqlGenerator,
        executor: MockExecutor,
        scraper: MockScraper,
        composer: MockComposer,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                responder: MockResponder::with_reply("static answer"),
                generator: MockSqlGenerator::with_sql("SELECT * FROM users"),
                executor: MockExecutor::with_output(SqlOutput::Status("ok".to_string())),
                scraper: MockScraper::with_outcome(ScrapeOutcome::default()),
                composer: MockComposer::with_reply("dynamic answer"),
            }
        }

        fn router(&self, label: QueryLabel) -> QueryRouter {
            let collaborators = Collaborators {
                static_responder: Arc::new(self.responder.clone()),
                sql_generator: Arc::new(self.generator.clone()),
                sql_executor: Arc::new(self.executor.clone()),
                scraper: Arc::new(self.scraper.clone()),
                composer: Arc::new(self.composer.clone()),
            };
            let config = RouterConfig {
                schema: "users (id INT, name VARCHAR)".to_string(),
            };
            QueryRouter::new(Arc::new(FixedLabelPredictor(label)), collaborators, config)
        }

        fn call_counts(&self) -> [usize; 5] {
            [
                self.responder.calls(),
                self.generator.calls(),
                self.executor.calls(),
                self.scraper.calls(),
                self.composer.calls(),
            ]
        }
    }

    #[tokio::test]
    async fn static_label_calls_only_the_responder() {
        let mocks = Mocks::new();
        let response = mocks.router(QueryLabel::Static).route("anything").await;
        assert_eq!(response, "static answer");
        assert_eq!(mocks.call_counts(), [1, 0, 0, 0, 0]);
        assert_eq!(mocks.responder.last_query().as_deref(), Some("anything"));
    }

    #[tokio::test]
    async fn dynamic_label_scrapes_then_composes() {
        let mocks = Mocks::new();
        let response = mocks.router(QueryLabel::Dynamic).route("anything").await;
        assert_eq!(response, "dynamic answer");
        assert_eq!(mocks.call_counts(), [0, 0, 0, 1, 1]);
    }

    #[tokio::test]
    async fn sql_label_generates_then_executes() {
        let mocks = Mocks::new();
        let response = mocks.router(QueryLabel::Sql).route("anything").await;
        assert_eq!(response, "ok");
        assert_eq!(mocks.call_counts(), [0, 1, 1, 0, 0]);
        assert_eq!(
            mocks.generator.last_schema().as_deref(),
            Some("users (id INT, name VARCHAR)")
        );
        assert_eq!(
            mocks.executor.last_sql().as_deref(),
            Some("SELECT * FROM users")
        );
    }

    #[tokio::test]
    async fn decision_carries_query_and_label() {
        let mocks = Mocks::new();
        let (decision, _) = mocks
            .router(QueryLabel::Dynamic)
            .route_with_decision("price of gold")
            .await;
        assert_eq!(
            decision,
            RoutingDecision {
                query: "price of gold".to_string(),
                label: QueryLabel::Dynamic,
            }
        );
    }

    #[tokio::test]
    async fn router_is_stateless_across_queries() {
        let mocks = Mocks::new();
        let router = mocks.router(QueryLabel::Static);
        let first = router.route("same").await;
        let second = router.route("same").await;
        assert_eq!(first, second);
        assert_eq!(mocks.responder.calls(), 2);
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_generation_skips_execution_and_renders_summary() {
        let mut mocks = Mocks::new();
        mocks.generator = MockSqlGenerator::failing();
        let response = mocks.router(QueryLabel::Sql).route("delete user 3").await;
        assert_eq!(
            response,
            "Sorry, the language model did not answer. Please try again later."
        );
        assert_eq!(mocks.executor.calls(), 0);
        assert!(logs_contain("query path failed"));
    }

    #[tokio::test]
    async fn failed_static_answer_is_rendered_not_propagated() {
        let mut mocks = Mocks::new();
        mocks.responder = MockResponder::failing();
        let response = mocks.router(QueryLabel::Static).route("hello").await;
        assert!(response.starts_with("Sorry, "));
        assert_eq!(mocks.call_counts(), [1, 0, 0, 0, 0]);
    }

    #[tokio::test]
    async fn failed_composition_is_rendered_not_propagated() {
        let mut mocks = Mocks::new();
        mocks.composer = MockComposer::failing();
        let response = mocks.router(QueryLabel::Dynamic).route("gold price").await;
        assert_eq!(
            response,
            "Sorry, the language model did not answer. Please try again later."
        );
        assert_eq!(mocks.call_counts(), [0, 0, 0, 1, 1]);
    }

    #[tokio::test]
    #[traced_test]
    async fn unreachable_database_is_rendered_not_propagated() {
        let mut mocks = Mocks::new();
        mocks.executor = MockExecutor::unavailable();
        let response = mocks.router(QueryLabel::Sql).route("list users").await;
        assert_eq!(
            response,
            "Sorry, the database is unavailable. Please try again later."
        );
        assert_eq!(mocks.call_counts(), [0, 1, 1, 0, 0]);
        assert_eq!(mocks.executor.last_sql().as_deref(), Some("SELECT * FROM users"));
        assert!(logs_contain("mock database unavailable"));
    }

    #[tokio::test]
    async fn rows_render_as_json() {
        let mut mocks = Mocks::new();
        let mut row = qroute_core::Row::new();
        row.insert("id".to_string(), 1.into());
        row.insert("name".to_string(), "Ada".into());
        mocks.executor = MockExecutor::with_output(SqlOutput::Rows(vec![row]));
        let response = mocks.router(QueryLabel::Sql).route("list users").await;
        assert_eq!(response, r#"[{"id":1,"name":"Ada"}]"#);
    }

    #[test]
    fn router_config_takes_database_schema() {
        let config = QrouteConfig::default();
        assert_eq!(RouterConfig::from(&config).schema, config.database.schema);
    }
}
