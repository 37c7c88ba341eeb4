// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with "did you mean?" suggestions.
//!
//! Every figment error becomes one [`ConfigError`]. Unknown keys are matched
//! against the valid keys of their section with Jaro-Winkler similarity and,
//! when the offending TOML file is known, point at the key in the source.

// the Diagnostic derive assigns fields it never reads back
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Keys scoring at or below this Jaro-Winkler similarity are never suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// One problem found while loading `qroute.toml`, renderable by miette.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// Key not declared by its section.
    #[error("`{key}` is not a qroute setting")]
    #[diagnostic(
        code(qroute::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        /// Comma-separated valid keys for the section.
        valid_keys: String,
        #[label("unknown key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type: found {found}")]
    #[diagnostic(code(qroute::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
    },

    #[error("`{key}` must be set")]
    #[diagnostic(
        code(qroute::config::missing_key),
        help("add `{key} = <value>` to your qroute.toml")
    )]
    MissingKey { key: String },

    /// A semantic validation failure on an otherwise well-typed value.
    #[error("invalid setting: {message}")]
    #[diagnostic(code(qroute::config::validation))]
    Validation { message: String },

    /// Anything figment reports that has no dedicated variant.
    #[error("could not load configuration: {0}")]
    #[diagnostic(code(qroute::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(close) => format!("perhaps `{close}`? Known keys here: {valid_keys}"),
        None => format!("known keys here: {valid_keys}"),
    }
}

/// Convert a `figment::Error` (which may hold several errors) into diagnostics.
///
/// `toml_sources` pairs a file path with its contents so unknown keys can be
/// located in the file they came from.
pub fn figment_to_config_errors(
    err: figment::Error,
    sources: &[(String, String)],
) -> Vec<ConfigError> {
    err.into_iter()
        .map(|error| convert_one(&error, sources))
        .collect()
}

fn convert_one(error: &figment::Error, sources: &[(String, String)]) -> ConfigError {
    use figment::error::Kind as K;

    let dotted_path = error.path.join(".");
    match &error.kind {
        K::UnknownField(field, expected) => {
            let suggestion = suggest_key(field, expected);
            let (span, src) = locate_in_sources(error, field, sources)
                .map(|(span, src)| (Some(span), Some(src)))
                .unwrap_or((None, None));
            ConfigError::UnknownKey {
                key: field.clone(),
                suggestion,
                valid_keys: expected.join(", "),
                span,
                src,
            }
        }
        K::MissingField(field) => ConfigError::MissingKey {
            key: if dotted_path.is_empty() {
                field.to_string()
            } else {
                format!("{dotted_path}.{field}")
            },
        },
        K::InvalidType(actual, wanted) => ConfigError::InvalidType {
            key: dotted_path,
            found: actual.to_string(),
            expected: wanted.to_string(),
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

/// Find the file an unknown key came from and the key's span inside it.
fn locate_in_sources(
    error: &figment::Error,
    field: &str,
    sources: &[(String, String)],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let path = match error.metadata.as_ref()?.source.as_ref()? {
        figment::Source::File(path) => path.display().to_string(),
        _ => return None,
    };
    let (name, content) = sources.iter().find(|(p, _)| *p == path)?;
    let offset = find_key_offset(content, &error.path, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(name, content.clone()),
    ))
}

/// Find the byte offset of `field` in TOML `content`.
///
/// With a non-empty `path`, the search starts after the `[section]` header
/// named by its first element. A match must be followed by whitespace or `=`.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        Some(section) => {
            let table = format!("[{section}]");
            content.find(&table)? + table.len()
        }
        None => 0,
    };

    let mut line_start = start;
    for line in content[start..].split_inclusive('\n') {
        let body = line.trim_start();
        let is_key = body
            .strip_prefix(field)
            .is_some_and(|rest| rest.starts_with([' ', '\t', '=']));
        if is_key {
            return Some(line_start + (line.len() - body.len()));
        }
        line_start += line.len();
    }
    None
}

/// Suggest the closest valid key, if any scores above the threshold.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Print every error to stderr as a miette report.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut report = String::new();
        if handler
            .render_report(&mut report, error as &dyn Diagnostic)
            .is_ok()
        {
            eprint!("{report}");
        } else {
            eprintln!("config: {error}");
        }
    }
}
