// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Qroute configuration system.

use figment::Jail;
use qroute_config::diagnostic::ConfigError;
use qroute_config::{load_and_validate_path, load_and_validate_str, load_config, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_qroute_config() {
    let toml = r#"
[agent]
name = "davinator"
log_level = "debug"

[classifier]
alpha = 0.5
lowercase = false
sublinear_tf = true

[ollama]
base_url = "http://gpu-box:11434"
static_model = "llama3.1:70b"
sql_model = "sqlcoder"
dynamic_model = "mistral"
timeout_secs = 30
max_retries = 0

[database]
path = "/tmp/sample.db"
schema = "Tables:\nusers (id INT)\n"
seed_schema = false

[scraper]
search_url = "https://search.example/search"
user_agent = "qroute-test"
wait_timeout_secs = 5
max_results = 3
recent_days = 7
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "davinator");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.classifier.alpha, 0.5);
    assert!(!config.classifier.lowercase);
    assert!(config.classifier.sublinear_tf);
    assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
    assert_eq!(config.ollama.static_model, "llama3.1:70b");
    assert_eq!(config.ollama.sql_model, "sqlcoder");
    assert_eq!(config.ollama.dynamic_model, "mistral");
    assert_eq!(config.ollama.timeout_secs, 30);
    assert_eq!(config.ollama.max_retries, 0);
    assert_eq!(config.database.path, "/tmp/sample.db");
    assert_eq!(config.database.schema, "Tables:\nusers (id INT)\n");
    assert!(!config.database.seed_schema);
    assert_eq!(config.scraper.search_url, "https://search.example/search");
    assert_eq!(config.scraper.user_agent, "qroute-test");
    assert_eq!(config.scraper.wait_timeout_secs, 5);
    assert_eq!(config.scraper.max_results, 3);
    assert_eq!(config.scraper.recent_days, 7);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "qroute");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.classifier.alpha, 1.0);
    assert!(config.classifier.lowercase);
    assert!(!config.classifier.sublinear_tf);
    assert_eq!(config.ollama.base_url, "http://localhost:11434");
    assert_eq!(config.ollama.static_model, "llama3.1");
    assert_eq!(config.ollama.sql_model, "llama3.2");
    assert_eq!(config.ollama.dynamic_model, "llama3.2");
    assert!(config.database.path.ends_with("qroute.db"));
    assert!(config.database.schema.contains("orders (id INT, user_id INT"));
    assert!(config.database.seed_schema);
    assert_eq!(config.scraper.wait_timeout_secs, 2);
    assert_eq!(config.scraper.max_results, 10);
    assert_eq!(config.scraper.recent_days, 1);
}

/// Unknown field in [ollama] is rejected.
#[test]
fn unknown_field_in_ollama_produces_error() {
    let toml = r#"
[ollama]
bse_url = "http://localhost:11434"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("bse_url"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown keys become diagnostics with a suggestion.
#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let toml = r#"
[classifier]
alpah = 0.5
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "alpah");
            assert_eq!(suggestion.as_deref(), Some("alpha"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Wrong value types become InvalidType diagnostics naming the key.
#[test]
fn wrong_type_produces_invalid_type_diagnostic() {
    let toml = r#"
[scraper]
max_results = "ten"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject string for integer");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("max_results"))),
        "got: {errors:?}"
    );
}

/// Deserializable but semantically invalid values fail validation.
#[test]
fn negative_alpha_fails_validation() {
    let toml = r#"
[classifier]
alpha = -1.0
"#;

    let errors = load_and_validate_str(toml).expect_err("negative alpha should fail");
    assert!(errors.iter().any(|e| matches!(e, ConfigError::Validation { .. })));
}

/// Environment variables override file values with explicit section mapping.
#[test]
fn env_var_overrides_file_value() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "qroute.toml",
            r#"
[ollama]
base_url = "http://from-file:11434"
static_model = "from-file"
"#,
        )?;
        jail.set_env("QROUTE_OLLAMA_BASE_URL", "http://from-env:11434");
        jail.set_env("QROUTE_SCRAPER_MAX_RESULTS", "4");

        let config = load_config()?;
        assert_eq!(config.ollama.base_url, "http://from-env:11434");
        assert_eq!(config.ollama.static_model, "from-file");
        assert_eq!(config.scraper.max_results, 4);
        Ok(())
    });
}

/// An explicit config path is loaded and validated.
#[test]
fn explicit_path_loads_and_validates() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
[agent]
name = "from-path"
"#,
    )
    .unwrap();

    let config = load_and_validate_path(&path).expect("file config should be valid");
    assert_eq!(config.agent.name, "from-path");
}

/// The default config serializes with every section present.
#[test]
fn default_config_serializes() {
    let config = load_config_from_str("").unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["ollama"]["sql_model"], "llama3.2");
    assert_eq!(json["classifier"]["alpha"], 1.0);
}
