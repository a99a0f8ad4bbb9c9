pub mod clients;
pub mod config;
pub mod core;
pub mod error;
pub mod interceptors;
pub mod parser;
pub mod prompt;
pub mod question;

// Convenient re-exports
pub use crate::core::{LowLevelClient, QuestionGenerator};
pub use error::AIError;
pub use parser::parse;
pub use question::GeneratedQuestion;

use clients::{OpenRouterClient, OpenRouterConfig};

/// Generate questions from `source_text` with the built-in OpenRouter setup.
///
/// Only `credential` is taken from the caller; endpoint, model, origin and
/// title are the defaults and no environment settings are consulted. Makes
/// one request, never retries. An empty result means the model gave nothing
/// usable, which is not an error.
pub async fn generate(
    source_text: &str,
    credential: &str,
) -> Result<Vec<GeneratedQuestion>, AIError> {
    generate_with_config(source_text, OpenRouterConfig::with_credential(credential)).await
}

/// Like [`generate`], against an explicitly configured endpoint.
pub async fn generate_with_config(
    source_text: &str,
    config: OpenRouterConfig,
) -> Result<Vec<GeneratedQuestion>, AIError> {
    QuestionGenerator::new(OpenRouterClient::new(config)).generate(source_text).await
}
