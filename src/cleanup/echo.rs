use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Characters the OCR injects invisibly: zero-width spaces and joiners,
/// soft hyphens, non-breaking hyphens
const INVISIBLE: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{00AD}', '\u{2011}'];

/// Strip invisible OCR characters and fold dash variants to a plain hyphen
pub fn normalize_ocr(text: &str) -> String {
    text.chars()
        .filter(|c| !INVISIBLE.contains(c))
        .map(|c| match c {
            '\u{2014}' | '\u{2013}' => '-',
            other => other,
        })
        .collect()
}

/// Canonical form used when comparing a line against a title: OCR
/// normalization, whitespace collapse, uppercase
pub fn normalize_for_compare(text: &str) -> String {
    let normalized = normalize_ocr(text);
    WHITESPACE_RE
        .replace_all(&normalized, " ")
        .trim()
        .to_uppercase()
}

/// Delete the lines of a turn's text that repeat its assigned title.
///
/// A line is deleted when its normalized form starts with the normalized
/// title; with an empty title this is a no-op.
pub fn remove_title_echo(text: &str, title: &str) -> String {
    if title.is_empty() {
        return text.to_string();
    }

    let norm_title = normalize_for_compare(title);
    text.lines()
        .filter(|line| !normalize_for_compare(line).starts_with(&norm_title))
        .collect::<Vec<_>>()
        .join("\n")
}
