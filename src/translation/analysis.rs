/*!
 * Paragraph analysis.
 *
 * The local helper model decomposes a paragraph into placeholder-bearing
 * templates (`translate`), a placeholder to term mapping (`keep`) and advisory
 * `context`. Its reply is free text, so the structured part is extracted in two
 * stages: a fenced ```json block first, then the first balanced `{...}` object.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::AnalysisError;
use crate::providers::Provider;
use crate::translation::prompts::build_analysis_prompt;

static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?i:json)[ \t]*\r?\n?(.*?)\s*```").expect("fenced block pattern is valid")
});

/// Structured decomposition of one paragraph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Templates to translate, containing `{name}` tokens
    #[serde(default)]
    pub translate: Vec<String>,

    /// Placeholder name to original technical term
    #[serde(default)]
    pub keep: BTreeMap<String, String>,

    /// Free-form classification metadata, advisory only
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub context: serde_json::Value,
}

/// A successful analysis together with the reply it was parsed from
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub raw_response: String,
}

/// A failed analysis; the raw reply is kept when one was received
#[derive(Debug)]
pub struct AnalysisFailure {
    pub error: AnalysisError,
    pub raw_response: Option<String>,
}

/// Locate the structured-data candidate in a model reply
///
/// Returns `None` only when the reply holds neither a fenced block nor a `{`.
pub fn extract_structured_block(raw: &str) -> Option<&str> {
    if let Some(block) = FENCED_JSON.captures(raw).and_then(|c| c.get(1)) {
        return Some(block.as_str());
    }

    find_braced_object(raw)
}

/// First top-level `{...}` object, matching braces outside of JSON strings
///
/// An unbalanced object yields everything from the opening brace, so that the
/// parse step reports it.
fn find_braced_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    Some(&raw[start..])
}

/// Parse a model reply into an analysis result
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let block = extract_structured_block(raw).ok_or(AnalysisError::NoStructuredData)?;
    serde_json::from_str(block).map_err(|e| AnalysisError::InvalidStructure(e.to_string()))
}

/// Runs the analysis request for paragraphs against a provider
#[derive(Debug)]
pub struct ParagraphAnalyzer<'a, P: Provider> {
    provider: &'a P,
}

impl<'a, P: Provider> ParagraphAnalyzer<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Ask the model to decompose one paragraph
    pub async fn analyze(&self, paragraph: &str) -> Result<Analysis, AnalysisFailure> {
        let raw_response = self.provider.prompt(&build_analysis_prompt(paragraph)).await
            .map_err(|e| AnalysisFailure {
                error: AnalysisError::Provider(e),
                raw_response: None,
            })?;

        match parse_analysis(&raw_response) {
            Ok(result) => {
                debug!(
                    "Analysis found {} template(s) and {} placeholder(s)",
                    result.translate.len(),
                    result.keep.len()
                );
                Ok(Analysis { result, raw_response })
            }
            Err(error) => Err(AnalysisFailure {
                error,
                raw_response: Some(raw_response),
            }),
        }
    }
}
