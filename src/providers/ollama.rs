use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::PlaceholderConfig;
use crate::errors::ProviderError;
use crate::providers::Provider;

/// Ollama client for interacting with Ollama API
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Model used by `request_for`
    model: String,
    /// Temperature used by `request_for`
    temperature: Option<f32>,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Temperature for generation (default: 0.8)
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Chat message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant, or tool)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat request for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model name to use for generation
    model: String,
    /// Messages of the conversation
    messages: Vec<ChatMessage>,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Whether to stream the response
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

/// Chat response from the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Model name
    #[serde(default)]
    pub model: String,
    /// Response message
    pub message: Option<ChatMessage>,
    /// Whether the generation is complete
    #[serde(default)]
    pub done: bool,
    /// Number of prompt tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u64>,
    /// Number of generated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u64>,
}

/// Builder methods for ChatRequest
impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            options: None,
            stream: Some(false),
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        match &mut self.options {
            Some(options) => options.temperature = Some(temperature),
            None => {
                self.options = Some(GenerationOptions {
                    temperature: Some(temperature),
                    num_predict: None,
                });
            }
        }
        self
    }
}

/// Normalize a host given with or without scheme/port into a base URL
///
/// A bare host gets `http://` and `default_port`. A host with a scheme but no
/// port gets the scheme's standard port (80 or 443).
pub fn normalize_base_url(host: &str, default_port: u16) -> String {
    let host = host.trim().trim_end_matches('/');

    match host.split_once("://") {
        Some((scheme, rest)) => {
            // Anything after the authority (a path) is kept as-is
            let authority = rest.split('/').next().unwrap_or(rest);
            if authority.contains(':') {
                return host.to_string();
            }
            let port = match scheme.to_ascii_lowercase().as_str() {
                "https" => 443,
                "http" => 80,
                _ => default_port,
            };
            let path = &rest[authority.len()..];
            format!("{}://{}:{}{}", scheme, authority, port, path)
        }
        None if host.contains(':') => format!("http://{}", host),
        None => format!("http://{}:{}", host, default_port),
    }
}

impl Ollama {
    /// Create a new Ollama client for the given host
    pub fn new(
        host: impl AsRef<str>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            // Ollama uses HTTP/1.1
            .http1_only()
            .build()
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: normalize_base_url(host.as_ref(), 11434),
            client,
            model: model.into(),
            temperature: None,
        })
    }

    /// Create a client from the placeholder workflow settings
    pub fn from_config(config: &PlaceholderConfig) -> Result<Self, ProviderError> {
        Ok(Self::new(&config.endpoint, config.model.clone(), Duration::from_secs(config.timeout_secs))?
            .with_temperature(config.temperature))
    }

    /// Set the decoding temperature used for prompts
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parse a chat body that is either one JSON object or newline-delimited chunks
    pub fn parse_chat_body(body: &str) -> Result<ChatResponse, ProviderError> {
        if let Ok(response) = serde_json::from_str::<ChatResponse>(body) {
            return Ok(response);
        }

        debug!("Chat response is not a single object, trying streamed chunks");

        let mut content = String::new();
        let mut model = String::new();
        let mut done = false;
        let mut prompt_eval_count = None;
        let mut eval_count = None;
        let mut chunks = 0;

        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let chunk: ChatResponse = serde_json::from_str(line).map_err(|e| {
                let preview: String = body.chars().take(500).collect();
                error!("Failed to parse Ollama chat response: {}. Raw response (first 500 chars): {}", e, preview);
                ProviderError::MalformedResponse(format!("Failed to parse Ollama chat response: {}", e))
            })?;

            chunks += 1;
            if let Some(message) = chunk.message {
                content.push_str(&message.content);
            }
            if !chunk.model.is_empty() {
                model = chunk.model;
            }
            done |= chunk.done;
            prompt_eval_count = chunk.prompt_eval_count.or(prompt_eval_count);
            eval_count = chunk.eval_count.or(eval_count);
        }

        if chunks == 0 {
            return Err(ProviderError::MalformedResponse("Empty Ollama chat response".to_string()));
        }

        Ok(ChatResponse {
            model,
            message: Some(ChatMessage {
                role: "assistant".to_string(),
                content,
            }),
            done,
            prompt_eval_count,
            eval_count,
        })
    }
}

#[async_trait]
impl Provider for Ollama {
    type Request = ChatRequest;
    type Response = ChatResponse;

    fn request_for(&self, prompt: &str) -> ChatRequest {
        let request = ChatRequest::new(self.model.clone(), vec![ChatMessage::user(prompt)]);
        match self.temperature {
            Some(temperature) => request.temperature(temperature),
            None => request,
        }
    }

    /// Chat with the Ollama API
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let url = format!("{}/api/chat", self.base_url);
        debug!("Sending chat request to {} (model {})", url, request.model);

        let response = self.client.post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to send chat request to Ollama API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to get response text from Ollama API: {}", e)))?;

        Self::parse_chat_body(&response_text)
    }

    fn extract_text(response: &ChatResponse) -> Result<String, ProviderError> {
        response.message.as_ref()
            .map(|m| m.content.clone())
            .ok_or_else(|| ProviderError::MalformedResponse("chat response has no message".to_string()))
    }
}
