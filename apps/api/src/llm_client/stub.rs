//! Canned `CompletionProvider` for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{parse_json_content, CompletionProvider, LlmError};

enum Reply {
    Content(String),
    ApiError { status: u16, message: String },
}

pub struct StubProvider {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    /// Replies with `content` as if the model had produced it.
    pub fn replying(content: &str) -> Self {
        Self::new(Reply::Content(content.to_string()))
    }

    /// Fails every call with an API error.
    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Reply::ApiError {
            status,
            message: message.to_string(),
        })
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete_json(&self, prompt: &str) -> Result<Value, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            Reply::Content(content) => parse_json_content(content),
            Reply::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
