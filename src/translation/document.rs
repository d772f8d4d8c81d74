/*!
 * Whole-document translation through a chat provider.
 */

use log::{debug, warn};

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::translation::frontmatter::has_front_matter;
use crate::translation::prompts::build_document_prompt;

/// Translates a complete markdown document in one request
#[derive(Debug)]
pub struct DocumentTranslator<P: Provider> {
    provider: P,
}

impl<P: Provider> DocumentTranslator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Translate markdown content; the reply text is returned trimmed
    pub async fn translate_markdown(&self, content: &str) -> Result<String, ProviderError> {
        if !has_front_matter(content) {
            warn!("No frontmatter detected in input file");
        }

        debug!("Translating content ({} chars)...", content.chars().count());
        self.provider.prompt(&build_document_prompt(content)).await
    }
}
