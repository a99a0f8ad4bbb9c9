pub mod models;

pub use self::models::OpenRouterModel;
use crate::config::{env_override, KeyFromEnv};
use crate::core::LowLevelClient;
use crate::error::{AIError, ConfigError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_ORIGIN: &str = "http://localhost";
pub const DEFAULT_TITLE: &str = "ATS Question Generator";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Configuration for the OpenRouter client
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub model: OpenRouterModel,
    pub endpoint: String,
    /// Sent as `HTTP-Referer`
    pub origin: String,
    /// Sent as `X-Title`
    pub title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: OpenRouterClient::find_key().unwrap_or_default(),
            model: env_override("QUIZGEN_MODEL")
                .map(|id| OpenRouterModel::from(id.as_str()))
                .unwrap_or_default(),
            endpoint: env_override("QUIZGEN_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            origin: env_override("QUIZGEN_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            title: env_override("QUIZGEN_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}

impl OpenRouterConfig {
    /// Built-in defaults with an explicit credential. Reads neither `.env`
    /// nor the environment.
    #[must_use]
    pub fn with_credential(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: OpenRouterModel::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// An explicit credential; other settings still honour `QUIZGEN_*` overrides.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Defaults, failing when no credential is configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default();
        if config.api_key.is_empty() {
            return Err(ConfigError::MissingKey(OpenRouterClient::KEY_NAME));
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_model(mut self, model: OpenRouterModel) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Chat-completion client for OpenRouter-compatible endpoints.
#[derive(Clone, Debug)]
pub struct OpenRouterClient {
    config: OpenRouterConfig,
    http: Client,
}

impl KeyFromEnv for OpenRouterClient {
    const KEY_NAME: &'static str = "OPENROUTER_API_KEY";
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        info!(
            model = %config.model.id(),
            endpoint = %config.endpoint,
            "Creating new OpenRouter client"
        );
        Self { config, http: Client::new() }
    }

    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }
}

/// Pull `choices[0].message.content` out of a response body.
///
/// Anything else (invalid JSON, missing fields, non-string content) is an
/// empty completion.
pub fn extract_content(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.pointer("/choices/0/message/content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl LowLevelClient for OpenRouterClient {
    #[instrument(
        target = "quiz_gen::client",
        skip(self, prompt),
        fields(prompt_len = prompt.len(), model = %self.config.model.id())
    )]
    async fn ask_raw(&self, prompt: String) -> Result<String, AIError> {
        let request = ChatRequest {
            model: self.config.model.id(),
            messages: vec![ChatMessage { role: "user", content: prompt }],
        };

        debug!(endpoint = %self.config.endpoint, "Sending chat completion request");
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.origin)
            .header("X-Title", &self.config.title)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                AIError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!(status = %status, "Received chat completion response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body
            };
            error!(status = %status, error = %message, "Completion service error");
            return Err(AIError::RemoteService { status: status.as_u16(), message });
        }

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            AIError::Transport(e.to_string())
        })?;

        let content = extract_content(&body);
        if content.is_empty() {
            debug!(body_len = body.len(), "Response carried no completion text");
        }
        info!(response_len = content.len(), "Received completion");
        Ok(content)
    }

    fn clone_box(&self) -> Box<dyn LowLevelClient> {
        Box::new(self.clone())
    }
}
