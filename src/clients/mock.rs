use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::{core::LowLevelClient, error::AIError};

/// Shared state behind a [`MockClient`]: queued replies and the prompts seen.
#[derive(Debug, Default)]
pub struct MockHandle {
    replies: Mutex<VecDeque<Result<String, AIError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockHandle {
    /// Queue a raw completion to return.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.lock_replies().push_back(Ok(text.into()));
    }

    /// Queue a failure to return.
    pub fn push_error(&self, error: AIError) {
        self.lock_replies().push_back(Err(error));
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, AIError>>> {
        self.replies.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Client that answers from a script instead of the network.
#[derive(Debug, Clone)]
pub struct MockClient {
    handle: Arc<MockHandle>,
}

impl MockClient {
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        (Self { handle: Arc::clone(&handle) }, handle)
    }

    /// A client that always has `text` as its next reply.
    pub fn with_reply(text: impl Into<String>) -> (Self, Arc<MockHandle>) {
        let (client, handle) = Self::new();
        handle.push_reply(text);
        (client, handle)
    }
}

#[async_trait]
impl LowLevelClient for MockClient {
    async fn ask_raw(&self, prompt: String) -> Result<String, AIError> {
        if let Ok(mut prompts) = self.handle.prompts.lock() {
            prompts.push(prompt);
        }
        self.handle
            .lock_replies()
            .pop_front()
            .unwrap_or_else(|| Err(AIError::Mock("no scripted reply left".to_string())))
    }

    fn clone_box(&self) -> Box<dyn LowLevelClient> {
        Box::new(self.clone())
    }
}
