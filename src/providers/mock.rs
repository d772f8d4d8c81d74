/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds, echoing the prompt
 * - `MockProvider::scripted()` - Replays a fixed sequence of replies
 * - `MockProvider::failing()` - Always fails with a remote-call error
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Mock response for testing
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// The reply text; `None` simulates a payload without the text field
    pub text: Option<String>,
}

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Successful reply with text
    Text(String),
    /// Non-success HTTP status
    Status(u16),
    /// Transport failure
    Unreachable,
    /// Successful call whose payload has no text
    Malformed,
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, echoing the prompt back
    Working,
    /// Replays scripted replies in order, then echoes
    Scripted,
    /// Always fails with a transport error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Remaining scripted replies
    replies: Mutex<VecDeque<MockReply>>,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Prompts received, in order
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            replies: Mutex::new(VecDeque::new()),
            request_count: Arc::new(AtomicUsize::new(0)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that replays the given replies in order
    pub fn scripted(replies: Vec<MockReply>) -> Self {
        let provider = Self::new(MockBehavior::Scripted);
        if let Ok(mut queue) = provider.replies.lock() {
            queue.extend(replies);
        }
        provider
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn next_reply(&self, request: &str) -> MockReply {
        match self.behavior {
            MockBehavior::Working => MockReply::Text(request.to_string()),
            MockBehavior::Failing => MockReply::Unreachable,
            MockBehavior::Scripted => self.replies.lock().ok()
                .and_then(|mut queue| queue.pop_front())
                .unwrap_or_else(|| MockReply::Text(request.to_string())),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    type Request = String;
    type Response = MockResponse;

    fn request_for(&self, prompt: &str) -> String {
        prompt.to_string()
    }

    async fn complete(&self, request: String) -> Result<MockResponse, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.clone());
        }

        match self.next_reply(&request) {
            MockReply::Text(text) => Ok(MockResponse { text: Some(text) }),
            MockReply::Malformed => Ok(MockResponse { text: None }),
            MockReply::Status(status_code) => Err(ProviderError::ApiError {
                status_code,
                message: "Mock API error".to_string(),
            }),
            MockReply::Unreachable => Err(ProviderError::RequestFailed("Mock connection refused".to_string())),
        }
    }

    fn extract_text(response: &MockResponse) -> Result<String, ProviderError> {
        response.text.clone()
            .ok_or_else(|| ProviderError::MalformedResponse("mock response has no text".to_string()))
    }
}
