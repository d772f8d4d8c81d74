/*!
 * Template translation backends.
 *
 * A backend maps one placeholder-bearing template and a target language to
 * translated text. The orchestration only sees the `TemplateTranslator` trait,
 * so a production service can replace the phrase table without other changes.
 */

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::translation::prompts::build_template_prompt;

/// Translates one template string into a target language
#[async_trait]
pub trait TemplateTranslator: Send + Sync {
    async fn translate(&self, template: &str, target_language: &str) -> Result<String, ProviderError>;
}

/// Static lookup of known phrases
///
/// Unknown templates come back wrapped as `[untranslated: ...]` with their
/// placeholder tokens intact.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    phrases: HashMap<String, String>,
}

impl PhraseTable {
    /// An empty table: every template is reported as untranslated
    pub fn empty() -> Self {
        Self { phrases: HashMap::new() }
    }

    /// English to Japanese phrases for common technical sentences
    pub fn english_to_japanese() -> Self {
        let phrases = [
            ("Hello world!", "こんにちは世界！"),
            ("The {word1} function returns a {word2}", "{word1} 関数は {word2} を返します"),
            (
                "The {word1} function returns a {word2} object containing user data.",
                "{word1} 関数はユーザーデータを含む {word2} オブジェクトを返します。",
            ),
            (
                "To install the package, run {word1} {word2}",
                "パッケージをインストールするには、{word1} {word2} を実行してください",
            ),
            (
                "The {word1} endpoint {word2} returns user details in {word3} format.",
                "{word1} エンドポイント {word2} は {word3} 形式でユーザー詳細を返します。",
            ),
        ];

        Self {
            phrases: phrases.iter()
                .map(|(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        }
    }

    /// Add or replace one phrase
    pub fn with_phrase(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.phrases.insert(source.into(), target.into());
        self
    }

    pub fn lookup(&self, template: &str) -> String {
        self.phrases.get(template)
            .cloned()
            .unwrap_or_else(|| format!("[untranslated: {}]", template))
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::english_to_japanese()
    }
}

#[async_trait]
impl TemplateTranslator for PhraseTable {
    /// The table holds a single language pair, so the target is not consulted
    async fn translate(&self, template: &str, _target_language: &str) -> Result<String, ProviderError> {
        Ok(self.lookup(template))
    }
}

/// Uses a model provider as the translation backend
#[derive(Debug)]
pub struct ProviderTemplateTranslator<P: Provider> {
    provider: P,
}

impl<P: Provider> ProviderTemplateTranslator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider> TemplateTranslator for ProviderTemplateTranslator<P> {
    async fn translate(&self, template: &str, target_language: &str) -> Result<String, ProviderError> {
        self.provider.prompt(&build_template_prompt(template, target_language)).await
    }
}
