// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as positive smoothing, URL schemes, and non-empty model names.

use crate::diagnostic::ConfigError;
use crate::model::QrouteConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &QrouteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.to_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` must be one of {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let alpha = config.classifier.alpha;
    if !alpha.is_finite() || alpha <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "classifier.alpha must be a positive number, got {}",
                config.classifier.alpha
            ),
        });
    }

    let base_url = config.ollama.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "ollama.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("ollama.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    for (key, model) in [
        ("ollama.static_model", &config.ollama.static_model),
        ("ollama.sql_model", &config.ollama.sql_model),
        ("ollama.dynamic_model", &config.ollama.dynamic_model),
    ] {
        if model.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if config.ollama.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "ollama.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.database.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "database.path must not be empty".to_string(),
        });
    }

    let search_url = config.scraper.search_url.trim();
    if !search_url.starts_with("http://") && !search_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("scraper.search_url `{search_url}` must start with http:// or https://"),
        });
    }

    if config.scraper.wait_timeout_secs < 1 {
        errors.push(ConfigError::Validation {
            message: "scraper.wait_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.scraper.max_results < 1 {
        errors.push(ConfigError::Validation {
            message: "scraper.max_results must be at least 1".to_string(),
        });
    }

    if config.scraper.recent_days < 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "scraper.recent_days must be non-negative, got {}",
                config.scraper.recent_days
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
