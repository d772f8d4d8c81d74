/*!
 * Error types for the mdtrans application.
 *
 * This module contains custom error types for the two translation pipelines,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to a model endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a response (connection refused, timeout, DNS...)
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The call succeeded but the payload does not have the expected shape
    #[error("Invalid response format from API: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Transport failures and non-success statuses are the same kind of failure
    pub fn is_remote_call_error(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ApiError { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

/// Errors that can occur while analyzing a single paragraph
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The analysis request itself failed
    #[error("Analysis request failed: {0}")]
    Provider(#[from] ProviderError),

    /// Neither a fenced block nor a braced structure was found in the response
    #[error("No structured data found in model response")]
    NoStructuredData,

    /// A candidate structure was found but could not be parsed
    #[error("Failed to parse structured data: {0}")]
    InvalidStructure(String),
}

impl AnalysisError {
    /// Both extraction failure paths are reported as the same kind
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::NoStructuredData | Self::InvalidStructure(_))
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, unreadable or malformed configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Input file missing or not valid UTF-8
    #[error("Failed to read input {path:?}: {message}")]
    InputRead {
        /// Path that was being read
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Output file could not be written
    #[error("Failed to write output file {path:?}: {message}")]
    OutputWrite {
        /// Path that was being written
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}
