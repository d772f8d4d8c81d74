/*!
 * Tests for placeholder restoration
 */

use std::collections::BTreeMap;
use mdtrans::translation::restore::{placeholder_names, restore_all, restore_placeholders};

fn keep(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_restorePlaceholders_withBothTokens_shouldReplaceRegardlessOfOrder() {
    let mapping = keep(&[("word1", "API"), ("word2", "JSON")]);

    let forward = restore_placeholders("{word1} は {word2} を返します", &mapping);
    let reversed = restore_placeholders("{word2} を {word1} が返します", &mapping);

    assert_eq!(forward, "API は JSON を返します");
    assert_eq!(reversed, "JSON を API が返します");
    assert!(!forward.contains('{') && !reversed.contains('{'));
}

#[test]
fn test_restorePlaceholders_withRepeatedToken_shouldReplaceEveryOccurrence() {
    let mapping = keep(&[("word1", "npm")]);
    assert_eq!(restore_placeholders("{word1} と {word1}", &mapping), "npm と npm");
}

#[test]
fn test_restorePlaceholders_withTokenLikeTerm_shouldNotResubstitute() {
    let mapping = keep(&[("word1", "{word2}"), ("word2", "JSON")]);
    assert_eq!(restore_placeholders("A {word1} B", &mapping), "A {word2} B");
}

#[test]
fn test_restoreAll_withUnmappedToken_shouldLeaveItAndReportIt() {
    let mapping = keep(&[("word1", "API")]);

    let restoration = restore_all(&["{word1} と {word3}"], &mapping);

    assert_eq!(restoration.texts, vec!["API と {word3}"]);
    assert_eq!(restoration.unresolved, vec!["word3"]);
    assert!(restoration.unused.is_empty());
    assert!(!restoration.is_total());
}

#[test]
fn test_restoreAll_withUnusedMapping_shouldReportItAndStillRestore() {
    let mapping = keep(&[("word1", "API"), ("word2", "JSON")]);

    let restoration = restore_all(&["{word1} を使う", "説明"], &mapping);

    assert_eq!(restoration.texts, vec!["API を使う", "説明"]);
    assert!(restoration.unresolved.is_empty());
    assert_eq!(restoration.unused, vec!["word2"]);
    assert!(restoration.is_total());
}

#[test]
fn test_restoreAll_withNonIdentifierBraces_shouldNotReportThem() {
    let restoration = restore_all(&["集合 {1, 2} を返す"], &BTreeMap::new());

    assert_eq!(restoration.texts, vec!["集合 {1, 2} を返す"]);
    assert!(restoration.unresolved.is_empty());
}

#[test]
fn test_placeholderNames_shouldListEachOnceInOrder() {
    assert_eq!(placeholder_names("{b} {a} {b}"), vec!["b", "a"]);
}
