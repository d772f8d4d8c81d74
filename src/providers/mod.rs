/*!
 * Provider implementations for the model endpoints.
 *
 * This module contains client implementations for the LLM providers:
 * - Anthropic: remote chat endpoint used by the direct translator
 * - Ollama: local model server used by the placeholder workflow
 * - Mock: scripted responses for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the translation workflows.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Build a single-user-message request for a prompt
    fn request_for(&self, prompt: &str) -> Self::Request;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Extract the reply text from the provider response
    ///
    /// Fails with `ProviderError::MalformedResponse` when the expected text is absent.
    fn extract_text(response: &Self::Response) -> Result<String, ProviderError>;

    /// Send one prompt and return the trimmed reply text
    ///
    /// A single attempt is made; failures are returned to the caller as-is.
    async fn prompt(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = self.request_for(prompt);
        let response = self.complete(request).await?;
        let text = Self::extract_text(&response)?;
        Ok(text.trim().to_string())
    }
}

pub mod anthropic;
pub mod mock;
pub mod ollama;
