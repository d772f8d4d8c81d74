/*!
 * Markdown translation using AI providers.
 *
 * This module contains the two translation pipelines and their building blocks:
 *
 * - `prompts`: Prompt templates and builders
 * - `frontmatter`: Front-matter detection
 * - `document`: Whole-document translation (direct translator)
 * - `segment`: Paragraph splitting
 * - `analysis`: Paragraph analysis into templates and kept terms
 * - `backend`: Pluggable template translation backends
 * - `restore`: Placeholder restoration
 * - `workflow`: Per-paragraph placeholder-protected orchestration
 */

// Re-export main types for easier usage
pub use self::analysis::{Analysis, AnalysisResult, ParagraphAnalyzer};
pub use self::backend::{PhraseTable, ProviderTemplateTranslator, TemplateTranslator};
pub use self::document::DocumentTranslator;
pub use self::frontmatter::has_front_matter;
pub use self::segment::split_into_paragraphs;
pub use self::workflow::{ParagraphOutcome, ParagraphResult, PlaceholderWorkflow, WorkflowSummary};

// Submodules
pub mod analysis;
pub mod backend;
pub mod document;
pub mod frontmatter;
pub mod prompts;
pub mod restore;
pub mod segment;
pub mod workflow;
