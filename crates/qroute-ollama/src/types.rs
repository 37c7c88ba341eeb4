// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Ollama `/api/generate` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for a single non-streaming completion.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    /// Always false; replies are read whole.
    pub stream: bool,
}

/// Successful completion body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    /// Generated text.
    pub response: String,
    #[serde(default)]
    pub done: bool,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_stream_false() {
        let req = GenerateRequest {
            model: "llama3.1",
            prompt: "hi",
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"model": "llama3.1", "prompt": "hi", "stream": false}));
    }

    #[test]
    fn response_ignores_extra_fields() {
        let body = r#"{"model":"llama3.1","created_at":"2026-01-01T00:00:00Z","response":"Hello!","done":true,"eval_count":3}"#;
        let resp: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.response, "Hello!");
        assert!(resp.done);
    }
}
