/*!
 * # mdtrans - Markdown translation with AI
 *
 * A Rust library for translating markdown blog posts from English to Japanese
 * using large language models.
 *
 * ## Features
 *
 * - Whole-document translation through the Anthropic messages API
 * - Placeholder-protected translation: technical terms are swapped for
 *   `{name}` tokens before translation and restored afterwards
 * - Per-paragraph error isolation with structured JSON output
 * - Front-matter detection
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Run logic behind the two command-line tools
 * - `translation`: Prompts, segmentation, analysis, backends, restoration and workflows
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::anthropic`: Anthropic API client
 *   - `providers::ollama`: Ollama API client
 *   - `providers::mock`: Scripted provider for tests
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `logging`: Stderr logger used by the binaries
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod logging;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{Config, PlaceholderConfig};
pub use app_controller::{Controller, PlaceholderController, TranslationBackend};
pub use errors::{AnalysisError, AppError, ProviderError};
pub use translation::{DocumentTranslator, PlaceholderWorkflow};
