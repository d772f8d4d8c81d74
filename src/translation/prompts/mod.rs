/*!
 * Prompt construction for markdown translation.
 *
 * This module provides:
 * - The whole-document English to Japanese instruction prompt
 * - The paragraph analysis request for the local helper model
 * - The template translation request used by the model backend
 */

pub mod templates;

// Re-export main types
pub use templates::{PromptTemplate, build_analysis_prompt, build_document_prompt, build_template_prompt};
