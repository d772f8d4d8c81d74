/*!
 * Front-matter detection for markdown documents.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// `---` line, any block (possibly empty), `---` line, anchored at the start.
/// The closing delimiter may end the document.
static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)\A---[ \t]*\r?\n(?s:.*?)^---[ \t]*\r?$")
        .expect("front-matter pattern is valid")
});

/// Whether the document begins with a front-matter block
pub fn has_front_matter(content: &str) -> bool {
    FRONT_MATTER.is_match(content)
}
