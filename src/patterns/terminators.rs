use once_cell::sync::Lazy;
use regex::Regex;

use super::{PatternFamily, ScanConfig};
use crate::models::Event;

/// Lines made of underscore or hyphen runs, used as horizontal rules
/// between items in the scanned record
static RULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ _\-]*_{3,}[ _\-]*$|^[ _\-]*-{3,}[ _\-]*$")
        .expect("rule pattern must compile")
});

/// The bracketed document header inserted at page joins
static DOC_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\[Congressional Record Volume[^\n]*\]$")
        .expect("doc header pattern must compile")
});

/// Lines of five or more equals signs, which also delimit NOTE blocks
pub(crate) static EQUALS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*={5,}[^\n]*$").expect("equals pattern must compile"));

/// Terminator family: underscore/hyphen rule lines
pub struct RuleLine;

impl PatternFamily for RuleLine {
    fn name(&self) -> &'static str {
        "rule-line"
    }

    fn scan(&self, text: &str, _config: &ScanConfig) -> Vec<Event> {
        RULE_RE
            .find_iter(text)
            .map(|m| Event::end_at(m.start(), m.end()))
            .collect()
    }
}

/// Terminator family: "[Congressional Record Volume ...]" header lines
pub struct DocHeader;

impl PatternFamily for DocHeader {
    fn name(&self) -> &'static str {
        "doc-header"
    }

    fn scan(&self, text: &str, _config: &ScanConfig) -> Vec<Event> {
        DOC_HEADER_RE
            .find_iter(text)
            .map(|m| Event::end_at(m.start(), m.end()))
            .collect()
    }
}

/// Terminator family: NOTE-boundary lines of `=====`
pub struct NoteMarker;

impl PatternFamily for NoteMarker {
    fn name(&self) -> &'static str {
        "note-marker"
    }

    fn scan(&self, text: &str, _config: &ScanConfig) -> Vec<Event> {
        EQUALS_RE
            .find_iter(text)
            .map(|m| Event::end_at(m.start(), m.end()))
            .collect()
    }
}
