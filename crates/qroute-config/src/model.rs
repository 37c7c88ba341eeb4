// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Qroute query router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Qroute configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QrouteConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Query classifier feature and smoothing settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Ollama language model settings.
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// SQL path database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Web search scraping settings.
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name shown in the shell banner.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "qroute".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Query classifier configuration.
///
/// Changing any of these changes the fitted model; identical values on an
/// identical corpus always produce identical predictions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Additive smoothing applied to per-label term weights. Must be positive.
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Lowercase text before tokenizing.
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Use `1 + ln(tf)` instead of raw term counts.
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            lowercase: default_lowercase(),
            sublinear_tf: false,
        }
    }
}

fn default_alpha() -> f64 {
    1.0
}

fn default_lowercase() -> bool {
    true
}

/// Ollama language model configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_ollama_base_url")]
    pub base_url: String,

    /// Model answering `static` queries.
    #[serde(default = "default_static_model")]
    pub static_model: String,

    /// Model translating `sql` queries to SQL.
    #[serde(default = "default_sql_model")]
    pub sql_model: String,

    /// Model summarizing scraped results for `dynamic` queries.
    #[serde(default = "default_dynamic_model")]
    pub dynamic_model: String,

    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_ollama_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries on transient HTTP statuses (429, 500, 503).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            static_model: default_static_model(),
            sql_model: default_sql_model(),
            dynamic_model: default_dynamic_model(),
            timeout_secs: default_ollama_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_static_model() -> String {
    "llama3.1".to_string()
}

fn default_sql_model() -> String {
    "llama3.2".to_string()
}

fn default_dynamic_model() -> String {
    "llama3.2".to_string()
}

fn default_ollama_timeout_secs() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    1
}

/// Database configuration for the `sql` path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Schema description handed to the SQL generator.
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Create the sample tables on startup when they do not exist.
    #[serde(default = "default_seed_schema")]
    pub seed_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            schema: default_schema(),
            seed_schema: default_seed_schema(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("qroute").join("qroute.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "qroute.db".to_string())
}

fn default_schema() -> String {
    "Tables:\n\
     users (id INT, name VARCHAR, email VARCHAR)\n\
     products (id INT, name VARCHAR, price DECIMAL)\n\
     orders (id INT, user_id INT, product_id INT, quantity INT)\n"
        .to_string()
}

fn default_seed_schema() -> bool {
    true
}

/// Web search scraping configuration for the `dynamic` path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScraperConfig {
    /// Search endpoint; the query is appended as the `q` parameter.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// User-Agent header sent with search requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum seconds to wait for the results page.
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    /// Maximum number of organic results kept.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Dated results older than this many days are dropped.
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            user_agent: default_user_agent(),
            wait_timeout_secs: default_wait_timeout_secs(),
            max_results: default_max_results(),
            recent_days: default_recent_days(),
        }
    }
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36"
        .to_string()
}

fn default_wait_timeout_secs() -> u64 {
    2
}

fn default_max_results() -> usize {
    10
}

fn default_recent_days() -> i64 {
    1
}
