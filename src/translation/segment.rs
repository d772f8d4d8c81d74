/*!
 * Paragraph segmentation.
 *
 * A paragraph is a maximal run of lines that are not blank (whitespace-only
 * lines count as blank). Splitting is deterministic and never yields empty
 * paragraphs.
 */

/// Split a document into paragraphs, in document order
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

/// Rejoin paragraphs with a single blank line between them
pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs.iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("\n\n")
}
