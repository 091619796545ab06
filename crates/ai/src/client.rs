//! HTTP client for the external summarization provider.

use serde::{Deserialize, Serialize};

use crate::prompts;
use crate::{SummarizeError, SummarizeResult};

/// Provider configuration resolved once at process startup.
///
/// The caller reads environment variables and constructs this; nothing in
/// this crate touches the process environment during request handling.
#[derive(Clone, Debug)]
pub struct SummarizerConfig {
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl SummarizerConfig {
    /// Creates a new `SummarizerConfig`.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::InvalidConfig` if the endpoint or model name
    /// is empty.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> SummarizeResult<Self> {
        let endpoint = endpoint.into();
        let model = model.into();

        if endpoint.trim().is_empty() {
            return Err(SummarizeError::InvalidConfig(
                "summarizer endpoint cannot be empty".into(),
            ));
        }
        if model.trim().is_empty() {
            return Err(SummarizeError::InvalidConfig(
                "summarizer model name cannot be empty".into(),
            ));
        }

        Ok(Self {
            endpoint,
            model,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: String,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary: String,
}

/// Client for the notes-summarization provider.
///
/// One request per call: no retry, no backoff. Provider latency is bounded
/// only by the transport defaults, matching the single non-cancellable
/// request/response model of the feature.
#[derive(Clone)]
pub struct NotesSummarizer {
    http: reqwest::Client,
    cfg: SummarizerConfig,
}

impl NotesSummarizer {
    /// Creates a new summarizer client over the given configuration.
    pub fn new(cfg: SummarizerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            cfg,
        }
    }

    /// Summarizes free-text patient notes via the external provider.
    ///
    /// Empty or whitespace-only input is rejected locally before any network
    /// call is made.
    ///
    /// # Errors
    ///
    /// - `SummarizeError::EmptyInput` for blank notes
    /// - `SummarizeError::Transport` when the request cannot be completed
    /// - `SummarizeError::Provider` for non-success provider responses or an
    ///   empty summary
    /// - `SummarizeError::InvalidResponse` when the response body is not the
    ///   expected shape
    pub async fn summarize(&self, patient_notes: &str) -> SummarizeResult<String> {
        if patient_notes.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let body = SummaryRequest {
            model: &self.cfg.model,
            system: prompts::SYSTEM_PROMPT,
            prompt: prompts::make_summary_prompt(patient_notes),
        };

        tracing::debug!(endpoint = %self.cfg.endpoint, "requesting notes summary");

        let mut request = self.http.post(&self.cfg.endpoint).json(&body);
        if let Some(key) = &self.cfg.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Provider(format!("{status}: {detail}")));
        }

        let parsed: SummaryResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::InvalidResponse(e.to_string()))?;

        if parsed.summary.trim().is_empty() {
            return Err(SummarizeError::Provider(
                "provider returned an empty summary".into(),
            ));
        }

        Ok(parsed.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> NotesSummarizer {
        // The endpoint is never reached by these tests; input rejection
        // happens before any network activity.
        let cfg = SummarizerConfig::new("http://127.0.0.1:1/v1/summarize", "test-model", None)
            .expect("valid config");
        NotesSummarizer::new(cfg)
    }

    #[tokio::test]
    async fn empty_notes_are_rejected_before_any_provider_call() {
        let err = test_client().summarize("").await.expect_err("expected rejection");
        assert!(matches!(err, SummarizeError::EmptyInput));
    }

    #[tokio::test]
    async fn whitespace_only_notes_are_rejected() {
        let err = test_client()
            .summarize("  \n\t ")
            .await
            .expect_err("expected rejection");
        assert!(matches!(err, SummarizeError::EmptyInput));
    }

    #[test]
    fn request_body_carries_model_system_and_prompt() {
        let body = SummaryRequest {
            model: "test-model",
            system: prompts::SYSTEM_PROMPT,
            prompt: prompts::make_summary_prompt("Mild fever and cough."),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["model"], "test-model");
        assert!(json["prompt"].as_str().expect("string").contains("Mild fever"));
    }

    #[test]
    fn config_rejects_an_empty_endpoint() {
        let err = SummarizerConfig::new("", "model", None).expect_err("expected failure");
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
    }

    #[test]
    fn config_rejects_an_empty_model_name() {
        let err =
            SummarizerConfig::new("http://localhost:8090", " ", None).expect_err("expected failure");
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
    }
}
