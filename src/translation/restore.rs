/*!
 * Placeholder restoration.
 *
 * Every `{name}` token whose name is in the mapping is replaced by its term in
 * a single pass, so a term that itself looks like a token is left alone.
 * Tokens without a mapping stay verbatim and are reported when they look like
 * identifiers; mapping entries no template referenced are reported too.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{BTreeMap, BTreeSet};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([^{}\r\n]+)\}").expect("placeholder pattern is valid")
});

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[A-Za-z_][A-Za-z0-9_\-]*\z").expect("identifier pattern is valid")
});

/// Restored texts plus what could not be matched up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Restoration {
    /// One restored text per input text, in order
    pub texts: Vec<String>,
    /// Token names left in the output because the mapping lacks them
    pub unresolved: Vec<String>,
    /// Mapping names that appeared in none of the input texts
    pub unused: Vec<String>,
}

impl Restoration {
    pub fn is_total(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Names of all braced tokens in a text, in order of first appearance
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    PLACEHOLDER.captures_iter(text)
        .map(|c| c[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Replace mapped tokens in one text
pub fn restore_placeholders(text: &str, keep: &BTreeMap<String, String>) -> String {
    PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
        keep.get(&caps[1])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

/// Restore every text and report unresolved tokens and unused mapping entries
pub fn restore_all<S: AsRef<str>>(texts: &[S], keep: &BTreeMap<String, String>) -> Restoration {
    let mut referenced = BTreeSet::new();
    let mut unresolved = BTreeSet::new();

    let restored = texts.iter()
        .map(|text| {
            let text = text.as_ref();
            for name in placeholder_names(text) {
                if keep.contains_key(&name) {
                    referenced.insert(name);
                } else if IDENTIFIER.is_match(&name) {
                    // Other braced text (code, set notation) is not a token
                    unresolved.insert(name);
                }
            }
            restore_placeholders(text, keep)
        })
        .collect();

    let unused = keep.keys()
        .filter(|name| !referenced.contains(*name))
        .cloned()
        .collect();

    Restoration {
        texts: restored,
        unresolved: unresolved.into_iter().collect(),
        unused,
    }
}
