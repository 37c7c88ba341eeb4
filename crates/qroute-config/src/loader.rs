// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./qroute.toml` > `~/.config/qroute/qroute.toml` > `/etc/qroute/qroute.toml`
//! with environment variable overrides via `QROUTE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::QrouteConfig;

/// Config sections, used to map `QROUTE_<SECTION>_<KEY>` onto `section.key`.
const SECTIONS: &[&str] = &["agent", "classifier", "ollama", "database", "scraper"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/qroute/qroute.toml` (system-wide)
/// 3. `~/.config/qroute/qroute.toml` (user XDG config)
/// 4. `./qroute.toml` (local directory)
/// 5. `QROUTE_*` environment variables
pub fn load_config() -> Result<QrouteConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<QrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QrouteConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<QrouteConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QrouteConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(QrouteConfig::default()))
        .merge(Toml::file("/etc/qroute/qroute.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("qroute/qroute.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("qroute.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `QROUTE_OLLAMA_BASE_URL` must map to `ollama.base_url`.
fn env_provider() -> Env {
    Env::prefixed("QROUTE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
