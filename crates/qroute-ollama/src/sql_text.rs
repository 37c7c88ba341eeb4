// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pulling a bare SQL statement out of a chatty model reply.
//!
//! A fenced code block wins if present. Otherwise the statement starts at the
//! first line opening with a SQL keyword and ends at the first `;`.

use std::sync::LazyLock;

use qroute_core::QrouteError;
use regex::Regex;

static STATEMENT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(select|insert|update|delete|with|create|drop|alter|replace|pragma)\b")
        .expect("statement pattern is valid")
});

/// Extract the SQL statement from a model reply.
pub fn extract_sql(reply: &str) -> Result<String, QrouteError> {
    let sql = match fenced_block(reply) {
        Some(body) => body.trim(),
        None => unfenced_statement(reply),
    };
    if sql.is_empty() {
        return Err(QrouteError::Provider {
            message: "model returned no SQL".to_string(),
            source: None,
        });
    }
    Ok(sql.to_string())
}

/// Body of the first ``` fence, without its language tag. An unclosed fence
/// runs to the end of the text.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")? + 3;
    let rest = &text[open..];
    let rest = match rest.find('\n') {
        Some(newline) if is_language_tag(&rest[..newline]) => &rest[newline + 1..],
        _ => rest,
    };
    let close = rest.find("```").unwrap_or(rest.len());
    Some(&rest[..close])
}

/// A single word such as `sql` or `sqlite`; a bare statement keyword is
/// part of the query, not a tag.
fn is_language_tag(line: &str) -> bool {
    let word = line.trim();
    word.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !STATEMENT_START.is_match(word)
}

fn unfenced_statement(text: &str) -> &str {
    let start = STATEMENT_START
        .find(text)
        .map(|m| m.start())
        .unwrap_or(0);
    let statement = &text[start..];
    let end = statement.find(';').map(|i| i + 1).unwrap_or(statement.len());
    statement[..end].trim()
}
