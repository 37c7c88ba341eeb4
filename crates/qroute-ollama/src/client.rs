// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Ollama generate API.
//!
//! Provides [`OllamaClient`] which sends one non-streaming completion per call
//! and retries transient errors (429, 500, 503).

use std::time::Duration;

use qroute_config::model::OllamaConfig;
use qroute_core::QrouteError;
use tracing::{debug, warn};

use crate::types::{ErrorResponse, GenerateRequest, GenerateResponse};

/// HTTP client for a single Ollama server. Cheap to clone.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl OllamaClient {
    /// Build a client for `config.base_url` with the configured timeout.
    pub fn new(config: &OllamaConfig) -> Result<Self, QrouteError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QrouteError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            timeout,
            max_retries: config.max_retries,
            retry_delay: Duration::from_secs(1),
        })
    }

    /// Overrides the delay between retries (keeps retry tests fast).
    #[cfg(test)]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Run `prompt` through `model` and return the generated text.
    ///
    /// An empty completion is an error.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, QrouteError> {
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let mut failure = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, model, "retrying generate request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            debug!(status = %status, attempt, model, "generate response received");

            if status.is_success() {
                let body: GenerateResponse =
                    response.json().await.map_err(|e| QrouteError::Provider {
                        message: format!("failed to parse Ollama response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                if body.response.trim().is_empty() {
                    return Err(QrouteError::Provider {
                        message: format!("model `{model}` returned an empty response"),
                        source: None,
                    });
                }
                return Ok(body.response);
            }

            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(api_err) => format!("Ollama error ({status}): {}", api_err.error),
                Err(_) => format!("Ollama returned {status}: {body}"),
            };

            if is_retryable(status) && attempt < self.max_retries {
                warn!(%status, body = %body, "ollama busy or failing, retrying");
                failure = Some(QrouteError::Provider {
                    message,
                    source: None,
                });
                continue;
            }

            return Err(QrouteError::Provider {
                message,
                source: None,
            });
        }

        Err(failure.unwrap_or_else(|| QrouteError::Provider {
            message: "generate request failed after retries".into(),
            source: None,
        }))
    }

    fn transport_error(&self, e: reqwest::Error) -> QrouteError {
        if e.is_timeout() {
            QrouteError::Timeout {
                duration: self.timeout,
            }
        } else {
            QrouteError::Provider {
                message: format!("HTTP request to Ollama failed: {e}"),
                source: Some(Box::new(e)),
            }
        }
    }
}

/// 429, 500 and 503 are retried; every other status fails immediately.
fn is_retryable(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
