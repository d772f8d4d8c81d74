use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::ProviderError;
use crate::providers::Provider;

/// Version marker sent with every request
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic client for interacting with Anthropic API
#[derive(Debug)]
pub struct Anthropic {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model identifier used by `request_for`
    model: String,
    /// Output token limit used by `request_for`
    max_tokens: u32,
}

/// Anthropic message request
#[derive(Debug, Serialize)]
pub struct AnthropicRequest {
    /// The model to use
    model: String,

    /// Maximum number of tokens to generate
    max_tokens: u32,

    /// The messages for the conversation
    messages: Vec<AnthropicMessage>,
}

/// Anthropic message format
#[derive(Debug, Serialize, Deserialize)]
pub struct AnthropicMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of input tokens
    pub input_tokens: u32,
    /// Number of output tokens
    pub output_tokens: u32,
}

/// Anthropic response
#[derive(Debug, Deserialize)]
pub struct AnthropicResponse {
    /// The content of the response
    #[serde(default)]
    pub content: Vec<AnthropicContent>,
    /// Token usage information
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// Individual content block in an Anthropic response
#[derive(Debug, Deserialize)]
pub struct AnthropicContent {
    /// The type of content
    #[serde(rename = "type", default)]
    pub content_type: String,

    /// The actual text content
    #[serde(default)]
    pub text: Option<String>,
}

impl AnthropicRequest {
    /// Create a new Anthropic request
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: Vec::new(),
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(AnthropicMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }
}

impl Anthropic {
    /// Create a new Anthropic client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            max_tokens,
        })
    }

    /// Create a client from the direct translator configuration
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.model.clone(),
            config.max_tokens,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Full URL of the messages endpoint
    pub fn messages_url(&self) -> String {
        if self.endpoint.is_empty() {
            "https://api.anthropic.com/v1/messages".to_string()
        } else {
            format!("{}/v1/messages", self.endpoint.trim_end_matches('/'))
        }
    }
}

#[async_trait]
impl Provider for Anthropic {
    type Request = AnthropicRequest;
    type Response = AnthropicResponse;

    fn request_for(&self, prompt: &str) -> AnthropicRequest {
        AnthropicRequest::new(self.model.clone(), self.max_tokens).add_message("user", prompt)
    }

    async fn complete(&self, request: AnthropicRequest) -> Result<AnthropicResponse, ProviderError> {
        let api_url = self.messages_url();
        debug!("Sending request to {} (model {})", api_url, request.model);

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Claude API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Anthropic API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read Claude API response: {}", e)))?;

        let anthropic_response: AnthropicResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(format!("Failed to parse Claude API response: {}", e)))?;

        if let Some(usage) = &anthropic_response.usage {
            debug!("Token usage: {} in, {} out", usage.input_tokens, usage.output_tokens);
        }

        Ok(anthropic_response)
    }

    /// Text of the first content block
    fn extract_text(response: &AnthropicResponse) -> Result<String, ProviderError> {
        response.content.first()
            .and_then(|c| c.text.clone())
            .ok_or_else(|| ProviderError::MalformedResponse(
                "response has no text in its first content block".to_string(),
            ))
    }
}
