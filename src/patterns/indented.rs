use once_cell::sync::Lazy;
use regex::Regex;

use super::{PatternFamily, ScanConfig};
use crate::models::Event;

/// Word shapes considered when scoring a heading line's capitalization
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w[\w'-]*\b").expect("word pattern must compile"));

/// Trailing "<day>, <year>" with an optional period
static DATE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}, \d{4}\.?$").expect("date pattern must compile"));

/// Column position of the first non-indent character, with tabs expanded
/// to `tab_width` columns
fn indent_width(line: &str, tab_width: usize) -> usize {
    let mut indent = 0;
    for ch in line.chars() {
        match ch {
            ' ' => indent += 1,
            '\t' => indent += tab_width,
            _ => break,
        }
    }
    indent
}

/// Terminator family: a deeply indented heading under a blank line, in
/// which at least half of the words begin uppercase. Such headings mark
/// the end of the preceding speech without opening a new one.
pub struct DeepIndentHeading;

impl PatternFamily for DeepIndentHeading {
    fn name(&self) -> &'static str {
        "deep-indent-heading"
    }

    fn scan(&self, text: &str, config: &ScanConfig) -> Vec<Event> {
        let mut events = Vec::new();
        let mut prev_blank = false;
        let mut first = true;
        let mut offset = 0;

        for line in text.split_inclusive('\n') {
            let line_start = offset;
            offset += line.len();

            // The first line has no predecessor, so it can never qualify
            let eligible = !first && prev_blank;
            first = false;
            prev_blank = line.trim().is_empty();

            if !eligible {
                continue;
            }
            if indent_width(line, config.tab_width) <= config.tab_width {
                continue;
            }

            let stripped = line.trim_end_matches(['\r', '\n']);
            let words: Vec<&str> = WORD_RE.find_iter(stripped).map(|m| m.as_str()).collect();
            if words.is_empty() {
                continue;
            }
            let uppercase_initial = words
                .iter()
                .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
                .count();
            if uppercase_initial * 2 >= words.len() {
                // Zero-width marker at the start of the heading line
                events.push(Event::end_at(line_start, line_start));
            }
        }

        events
    }
}

/// Terminator family: a right-justified date line such as
/// "               TUESDAY, January 25, 1994."
pub struct RightJustifiedDate;

impl PatternFamily for RightJustifiedDate {
    fn name(&self) -> &'static str {
        "right-justified-date"
    }

    fn scan(&self, text: &str, config: &ScanConfig) -> Vec<Event> {
        let mut events = Vec::new();
        let mut offset = 0;

        for line in text.split_inclusive('\n') {
            let line_start = offset;
            offset += line.len();

            // A tab anywhere in the indent run counts as the full threshold
            if indent_width(line, config.date_indent_threshold) < config.date_indent_threshold {
                continue;
            }
            if DATE_END_RE.is_match(line.trim()) {
                events.push(Event::end_at(line_start, line_start));
            }
        }

        events
    }
}
