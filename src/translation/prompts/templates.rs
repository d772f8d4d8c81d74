/*!
 * Prompt templates for markdown translation.
 *
 * Every template is rendered by plain `{variable}` replacement; the document
 * content is always substituted last so that braces inside it are never
 * mistaken for template variables.
 */

/// A prompt template with `{variable}` slots.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Whole-document translation instructions for the chat endpoint.
    pub const DOCUMENT_TRANSLATOR: &'static str = r#"You are an expert translator of English technical blog posts into Japanese.

Translate the following English markdown file into Japanese.

Rules:
1. Keep the keys of the front-matter (the block enclosed by ---) in English and translate only the values.
2. Preserve the markdown structure (headings, lists, links, images, code blocks) exactly.
3. Translate technical terms into appropriate Japanese, or transliterate them into katakana where that is the common usage.
4. Write natural, readable Japanese prose.
5. Leave URLs, file paths, HTML tags and markdown syntax unchanged.

English markdown to translate:

{content}

Output only the translated Japanese markdown:"#;

    /// Request sent to the local helper model for each paragraph.
    pub const PARAGRAPH_ANALYSIS: &'static str = "Analyze this text: {content}";

    /// Request used when the local model also acts as the translation backend.
    pub const TEMPLATE_TRANSLATOR: &'static str = r#"Translate the following text into {target_language}.
Tokens written as {name} in curly braces are placeholders: copy every one of them unchanged and do not translate, remove or reorder the braces.
Output only the translation.

{content}"#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template; `content` is inserted after all other variables.
    pub fn render(&self, variables: &[(&str, &str)], content: &str) -> String {
        let mut rendered = self.template.clone();
        for (name, value) in variables {
            rendered = rendered.replace(&format!("{{{}}}", name), value);
        }
        rendered.replacen("{content}", content, 1)
    }
}

/// Build the whole-document translation prompt.
pub fn build_document_prompt(content: &str) -> String {
    PromptTemplate::new(PromptTemplate::DOCUMENT_TRANSLATOR).render(&[], content)
}

/// Build the analysis request for one paragraph.
pub fn build_analysis_prompt(paragraph: &str) -> String {
    PromptTemplate::new(PromptTemplate::PARAGRAPH_ANALYSIS).render(&[], paragraph)
}

/// Build the translation request for one placeholder-bearing template.
pub fn build_template_prompt(template: &str, target_language: &str) -> String {
    PromptTemplate::new(PromptTemplate::TEMPLATE_TRANSLATOR)
        .render(&[("target_language", target_language)], template)
}
