// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite executor for generated statements.
//!
//! Row-returning statements come back as JSON rows; everything else runs as a
//! batch and reports success. Database errors are rendered into the output
//! text instead of failing the request. All work goes through the single
//! tokio-rusqlite background thread.

use async_trait::async_trait;
use qroute_config::model::DatabaseConfig;
use qroute_core::{QrouteError, Row, SqlExecutor, SqlOutput};
use rusqlite::types::ValueRef;
use serde_json::Value;
use tracing::{error, info};

use crate::migrations::run_migrations;

/// Convert a tokio-rusqlite error into QrouteError::Storage.
fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> QrouteError {
    QrouteError::Storage {
        source: Box::new(e),
    }
}

/// [`SqlExecutor`] backed by one SQLite database.
pub struct SqliteExecutor {
    conn: tokio_rusqlite::Connection,
}

impl SqliteExecutor {
    pub fn new(conn: tokio_rusqlite::Connection) -> Self {
        Self { conn }
    }

    /// Open the database at `config.path`, creating parent directories, and
    /// create the sample tables when `seed_schema` is set.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, QrouteError> {
        let parent = std::path::Path::new(&config.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent).map_err(|e| QrouteError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(&config.path)
            .await
            .map_err(|e| QrouteError::Storage {
                source: Box::new(e),
            })?;
        let executor = Self::new(conn);
        if config.seed_schema {
            executor.initialize().await?;
        }
        info!(path = %config.path, "database opened");
        Ok(executor)
    }

    /// Open a private in-memory database.
    pub async fn open_in_memory() -> Result<Self, QrouteError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(|e| QrouteError::Storage {
                source: Box::new(e),
            })?;
        Ok(Self::new(conn))
    }

    /// Create the `users`, `products`, and `orders` tables if missing.
    pub async fn initialize(&self) -> Result<(), QrouteError> {
        let applied = self
            .conn
            .call(|conn| -> Result<_, rusqlite::Error> { Ok(run_migrations(conn)) })
            .await
            .map_err(map_tr_err)??;
        info!(applied, "database schema ready");
        Ok(())
    }
}

#[async_trait]
impl SqlExecutor for SqliteExecutor {
    async fn execute_sql(&self, sql: &str) -> Result<SqlOutput, QrouteError> {
        info!(sql = %sql, "executing SQL");
        let statement = sql.to_string();
        let result = self
            .conn
            .call(move |conn| -> Result<_, rusqlite::Error> { Ok(run_statement(conn, &statement)) })
            .await
            .map_err(map_tr_err)?;

        match result {
            Ok(output) => Ok(output),
            Err(e) => {
                error!(error = %e, sql = %sql, "database error");
                Ok(SqlOutput::Status(format!("Database error: {e}")))
            }
        }
    }
}

/// True when the statement is expected to produce rows.
///
/// Leading `--` and `/* */` comments are skipped before the keyword is read.
pub fn returns_rows(sql: &str) -> bool {
    let head: String = skip_comments(sql)
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    head == "select" || head == "with"
}

fn skip_comments(sql: &str) -> &str {
    let mut rest = sql.trim_start();
    loop {
        if let Some(line) = rest.strip_prefix("--") {
            rest = line.find('\n').map_or("", |end| &line[end + 1..]);
        } else if let Some(block) = rest.strip_prefix("/*") {
            rest = block.find("*/").map_or("", |end| &block[end + 2..]);
        } else {
            return rest;
        }
        rest = rest.trim_start();
    }
}

fn run_statement(conn: &rusqlite::Connection, sql: &str) -> Result<SqlOutput, rusqlite::Error> {
    if !returns_rows(sql) {
        conn.execute_batch(sql)?;
        return Ok(SqlOutput::Status(format!(
            "Query executed successfully: {sql}"
        )));
    }

    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let rows = stmt
        .query_map([], |row| {
            let mut map = Row::new();
            for (index, name) in columns.iter().enumerate() {
                map.insert(name.clone(), to_json(row.get_ref(index)?));
            }
            Ok(map)
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SqlOutput::Rows(rows))
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Value::String(format!("<{} byte blob>", bytes.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> SqliteExecutor {
        let executor = SqliteExecutor::open_in_memory().await.unwrap();
        executor.initialize().await.unwrap();
        executor
            .execute_sql(
                "INSERT INTO users (id, name, email) VALUES (1, 'Ada', 'ada@example.com'), \
                 (2, 'Grace', NULL), (3, 'Linus', 'linus@example.com');",
            )
            .await
            .unwrap();
        executor
    }

    #[test]
    fn row_detection_uses_leading_keyword() {
        assert!(returns_rows("SELECT 1"));
        assert!(returns_rows("  \n select * from users"));
        assert!(returns_rows("WITH t AS (SELECT 1) SELECT * FROM t"));
        assert!(!returns_rows("DELETE FROM users"));
        assert!(!returns_rows("selection_table"));
        assert!(!returns_rows(""));
    }

    #[test]
    fn row_detection_skips_leading_comments() {
        assert!(returns_rows("-- list users\nSELECT * FROM users;"));
        assert!(returns_rows("/* all rows */ select 1"));
        assert!(returns_rows("-- one\n  /* two\n lines */\n-- three\nWITH t AS (SELECT 1) SELECT * FROM t"));
        assert!(!returns_rows("-- remove\nDELETE FROM users WHERE id = 3"));
        assert!(!returns_rows("-- SELECT only in a comment"));
        assert!(!returns_rows("/* unterminated SELECT"));
    }

    #[tokio::test]
    async fn commented_select_still_returns_rows() {
        let executor = seeded().await;
        let output = executor
            .execute_sql("-- list users\nSELECT name FROM users WHERE id = 1;")
            .await
            .unwrap();
        assert_eq!(output.to_string(), r#"[{"name":"Ada"}]"#);
    }

    #[tokio::test]
    async fn select_returns_rows_as_json() {
        let executor = seeded().await;
        let output = executor
            .execute_sql("SELECT id, name, email FROM users ORDER BY id")
            .await
            .unwrap();
        let SqlOutput::Rows(rows) = &output else {
            panic!("expected rows, got {output:?}");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["name"], "Ada");
        assert_eq!(rows[1]["email"], Value::Null);
        assert_eq!(rows[2]["id"], 3);
    }

    #[tokio::test]
    async fn reals_and_empty_results() {
        let executor = seeded().await;
        executor
            .execute_sql("INSERT INTO products (id, name, price) VALUES (1, 'Laptop', 1200.5)")
            .await
            .unwrap();
        let output = executor
            .execute_sql("select price from products")
            .await
            .unwrap();
        assert_eq!(output.to_string(), r#"[{"price":1200.5}]"#);

        let empty = executor
            .execute_sql("SELECT * FROM orders")
            .await
            .unwrap();
        assert_eq!(empty, SqlOutput::Rows(Vec::new()));
        assert_eq!(empty.to_string(), "[]");
    }

    #[tokio::test]
    async fn delete_reports_success_and_changes_data() {
        let executor = seeded().await;
        let sql = "DELETE FROM users WHERE id = 3;";
        let output = executor.execute_sql(sql).await.unwrap();
        assert_eq!(
            output,
            SqlOutput::Status(format!("Query executed successfully: {sql}"))
        );

        let remaining = executor
            .execute_sql("SELECT COUNT(*) AS n FROM users")
            .await
            .unwrap();
        assert_eq!(remaining.to_string(), r#"[{"n":2}]"#);
    }

    #[tokio::test]
    async fn database_errors_are_rendered() {
        let executor = seeded().await;
        let output = executor
            .execute_sql("SELECT * FROM customers")
            .await
            .unwrap();
        let SqlOutput::Status(message) = output else {
            panic!("expected status");
        };
        assert!(message.starts_with("Database error: "), "got: {message}");
        assert!(message.contains("customers"), "got: {message}");
    }

    #[tokio::test]
    async fn syntax_errors_in_batches_are_rendered() {
        let executor = seeded().await;
        let output = executor.execute_sql("DROP TABLEZ users").await.unwrap();
        assert!(output.to_string().starts_with("Database error: "));
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let executor = SqliteExecutor::open_in_memory().await.unwrap();
        executor.initialize().await.unwrap();
        executor.initialize().await.unwrap();
        let output = executor
            .execute_sql("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'products', 'orders') ORDER BY name")
            .await
            .unwrap();
        assert_eq!(
            output.to_string(),
            r#"[{"name":"orders"},{"name":"products"},{"name":"users"}]"#
        );
    }
}
