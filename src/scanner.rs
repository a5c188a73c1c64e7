use tracing::debug;

use crate::models::{sort_events, Event};
use crate::patterns::{catalog, terminators::EQUALS_RE, ScanConfig};

/// Prepare a raw transcript for scanning: remove NOTE-block content and
/// normalize non-breaking spaces.
///
/// All downstream spans (turns, title blocks, sections) refer to the text
/// this function returns, not the caller's raw input.
pub fn prepare_transcript(raw: &str) -> String {
    let stripped = strip_note_blocks(raw);
    stripped.replace('\u{00A0}', " ")
}

/// Remove content strictly between pairs of `=====` marker lines, keeping
/// the marker lines themselves (they still act as terminators).
pub fn strip_note_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut inside = false;

    for line in text.split_inclusive('\n') {
        if EQUALS_RE.is_match(line.trim_end_matches('\n')) {
            out.push_str(line);
            inside = !inside;
            continue;
        }
        if inside {
            continue;
        }
        out.push_str(line);
    }

    out
}

/// Scan a prepared transcript with every pattern family and merge the
/// results into one ordered timeline.
///
/// Events are sorted by start offset; at equal offsets a terminator sorts
/// before a speaker start, and the sort is otherwise stable with respect
/// to the catalog order.
pub fn scan_events(text: &str, config: &ScanConfig) -> Vec<Event> {
    let mut events = Vec::new();

    for family in catalog() {
        let found = family.scan(text, config);
        debug!(family = family.name(), matches = found.len(), "scanned pattern family");
        events.extend(found);
    }

    sort_events(&mut events);
    events
}
