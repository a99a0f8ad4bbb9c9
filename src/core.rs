//! Generation API: wraps a low-level completion client with prompt
//! construction and lenient parsing.
//!
//! - `LowLevelClient` is the seam to a remote model: one prompt in, raw text out.
//! - `QuestionGenerator` builds the prompt, makes exactly one call and hands
//!   the reply to [`crate::parser::parse`].

use crate::error::AIError;
use crate::interceptors::Interceptor;
use crate::parser;
use crate::prompt::build_prompt;
use crate::question::GeneratedQuestion;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Low-level model client abstraction.
///
/// Implementors provide `ask_raw`, which executes a prompt and returns the raw
/// model text. A reply whose envelope cannot be read should come back as an
/// empty string; only transport and service failures are errors.
#[async_trait]
pub trait LowLevelClient: Send + Sync + Debug {
    async fn ask_raw(&self, prompt: String) -> Result<String, AIError>;

    /// Clone this client into a boxed trait object
    fn clone_box(&self) -> Box<dyn LowLevelClient>;
}

impl Clone for Box<dyn LowLevelClient> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[async_trait]
impl LowLevelClient for Box<dyn LowLevelClient> {
    async fn ask_raw(&self, prompt: String) -> Result<String, AIError> {
        self.as_ref().ask_raw(prompt).await
    }

    fn clone_box(&self) -> Box<dyn LowLevelClient> {
        self.as_ref().clone_box()
    }
}

/// Turns source text into questions through a single model call.
#[derive(Clone, Debug)]
pub struct QuestionGenerator<C: LowLevelClient> {
    client: C,
    interceptor: Option<Arc<dyn Interceptor>>,
}

impl<C: LowLevelClient> QuestionGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client, interceptor: None }
    }

    /// Record every prompt and raw reply through `interceptor`.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generate questions from `source_text`.
    ///
    /// Errors only when the remote call fails. A reply with nothing usable
    /// yields `Ok` with an empty list.
    #[instrument(
        target = "quiz_gen::generator",
        skip(self, source_text),
        fields(source_len = source_text.len())
    )]
    pub async fn generate(&self, source_text: &str) -> Result<Vec<GeneratedQuestion>, AIError> {
        let prompt = build_prompt(source_text);
        info!(prompt_len = prompt.len(), "Requesting questions");

        let raw = match self.client.ask_raw(prompt.clone()).await {
            Ok(raw) => raw,
            Err(e) => {
                // The client already logged the failure in detail.
                debug!(error = %e, "Completion request failed");
                return Err(e);
            }
        };

        if let Some(interceptor) = &self.interceptor {
            if let Err(e) = interceptor.save(&prompt, &raw).await {
                warn!(error = %e, "Failed to save transcript");
            }
        }

        let questions = parser::parse(&raw);
        if questions.is_empty() {
            warn!(response_len = raw.len(), "Completion contained no usable questions");
        } else {
            info!(count = questions.len(), "Generated questions");
        }
        Ok(questions)
    }
}
