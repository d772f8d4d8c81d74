/*!
 * Placeholder-protected translation workflow.
 *
 * Each paragraph goes through analyze -> translate templates -> restore terms,
 * one paragraph at a time. A failing paragraph is recorded as an error and the
 * document carries on with the next one.
 */

use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{AppError, ProviderError};
use crate::file_utils::FileManager;
use crate::providers::Provider;
use crate::translation::analysis::{Analysis, AnalysisResult, ParagraphAnalyzer};
use crate::translation::backend::TemplateTranslator;
use crate::translation::restore::restore_all;
use crate::translation::segment::split_into_paragraphs;

/// Translated templates of one paragraph and their restored form
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderTranslation {
    /// Backend output, tokens still in place
    pub translated: Vec<String>,
    /// Mapping used for restoration
    pub placeholders: BTreeMap<String, String>,
    /// Texts with the original terms substituted back
    pub final_texts: Vec<String>,
    /// Tokens that had no mapping and were left as-is
    pub unresolved_placeholders: Vec<String>,
    /// Mapping entries that no translated text referenced
    pub unused_placeholders: Vec<String>,
}

/// What happened to one paragraph
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ParagraphOutcome {
    Translated {
        analysis: Analysis,
        translation: PlaceholderTranslation,
    },
    Failed {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw_response: Option<String>,
    },
}

/// Per-paragraph record of the output artifact
#[derive(Debug, Clone, Serialize)]
pub struct ParagraphResult {
    /// 1-based position in the document
    pub paragraph_id: usize,
    pub original: String,
    #[serde(flatten)]
    pub outcome: ParagraphOutcome,
}

impl ParagraphResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ParagraphOutcome::Translated { .. })
    }

    /// Restored texts, if the paragraph was translated
    pub fn final_texts(&self) -> Option<&[String]> {
        match &self.outcome {
            ParagraphOutcome::Translated { translation, .. } => Some(&translation.final_texts),
            ParagraphOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ParagraphOutcome::Translated { .. } => None,
            ParagraphOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Success and failure counts over a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl WorkflowSummary {
    pub fn from_results(results: &[ParagraphResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }
}

/// Drives the per-paragraph workflow
pub struct PlaceholderWorkflow<P: Provider, T: TemplateTranslator> {
    analyzer: P,
    translator: T,
    target_language: String,
}

impl<P: Provider, T: TemplateTranslator> PlaceholderWorkflow<P, T> {
    pub fn new(analyzer: P, translator: T, target_language: impl Into<String>) -> Self {
        Self {
            analyzer,
            translator,
            target_language: target_language.into(),
        }
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Translate every template of an analysis and restore the kept terms
    pub async fn translate_with_placeholders(
        &self,
        analysis: &AnalysisResult,
    ) -> Result<PlaceholderTranslation, ProviderError> {
        let mut translated = Vec::with_capacity(analysis.translate.len());
        for template in &analysis.translate {
            translated.push(self.translator.translate(template, &self.target_language).await?);
        }

        let restoration = restore_all(&translated, &analysis.keep);

        Ok(PlaceholderTranslation {
            translated,
            placeholders: analysis.keep.clone(),
            final_texts: restoration.texts,
            unresolved_placeholders: restoration.unresolved,
            unused_placeholders: restoration.unused,
        })
    }

    /// Analyze, translate and restore one paragraph; failures are recorded, not raised
    pub async fn process_paragraph(&self, paragraph_id: usize, paragraph: &str) -> ParagraphResult {
        let outcome = match ParagraphAnalyzer::new(&self.analyzer).analyze(paragraph).await {
            Ok(analysis) => match self.translate_with_placeholders(&analysis.result).await {
                Ok(translation) => {
                    if !translation.unresolved_placeholders.is_empty() {
                        warn!(
                            "Paragraph {}: placeholders without a mapping left in place: {}",
                            paragraph_id,
                            translation.unresolved_placeholders.join(", ")
                        );
                    }
                    if !translation.unused_placeholders.is_empty() {
                        warn!(
                            "Paragraph {}: mapped placeholders not found in the translation: {}",
                            paragraph_id,
                            translation.unused_placeholders.join(", ")
                        );
                    }
                    ParagraphOutcome::Translated { analysis, translation }
                }
                Err(e) => {
                    warn!("Paragraph {}: translation failed: {}", paragraph_id, e);
                    ParagraphOutcome::Failed {
                        error: e.to_string(),
                        raw_response: Some(analysis.raw_response),
                    }
                }
            },
            Err(failure) => {
                warn!("Paragraph {}: analysis failed: {}", paragraph_id, failure.error);
                ParagraphOutcome::Failed {
                    error: failure.error.to_string(),
                    raw_response: failure.raw_response,
                }
            }
        };

        ParagraphResult {
            paragraph_id,
            original: paragraph.to_string(),
            outcome,
        }
    }

    /// Process a whole document, reporting each finished paragraph to `on_paragraph`
    pub async fn process_document_with<F>(&self, content: &str, mut on_paragraph: F) -> Vec<ParagraphResult>
    where
        F: FnMut(&ParagraphResult, usize),
    {
        let paragraphs = split_into_paragraphs(content);
        let total = paragraphs.len();
        let mut results = Vec::with_capacity(total);

        for (index, paragraph) in paragraphs.iter().enumerate() {
            debug!("Processing paragraph {}/{}", index + 1, total);
            let result = self.process_paragraph(index + 1, paragraph).await;
            on_paragraph(&result, total);
            results.push(result);
        }

        results
    }

    pub async fn process_document(&self, content: &str) -> Vec<ParagraphResult> {
        self.process_document_with(content, |_, _| {}).await
    }

    /// Read a file and process it; only reading the file can fail
    pub async fn process_file<Q: AsRef<Path>>(&self, path: Q) -> Result<Vec<ParagraphResult>, AppError> {
        let content = FileManager::read_to_string(path)?;
        Ok(self.process_document(&content).await)
    }
}

/// Serialize a result set as indented JSON, keeping non-ASCII text as-is
pub fn results_to_json(results: &[ParagraphResult]) -> Result<String, AppError> {
    serde_json::to_string_pretty(results)
        .map_err(|e| AppError::OutputWrite {
            path: "<json>".into(),
            message: format!("Failed to serialize results: {}", e),
        })
}
