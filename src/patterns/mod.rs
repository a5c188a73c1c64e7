pub mod indented;
pub mod speaker;
pub mod terminators;

pub use indented::{DeepIndentHeading, RightJustifiedDate};
pub use speaker::SpeakerStart;
pub use terminators::{DocHeader, NoteMarker, RuleLine};

use crate::models::Event;

/// Tunable widths for the indentation-based terminator families
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Column width a tab expands to; a heading must be indented deeper
    /// than this to count as an implicit end-of-speech marker
    pub tab_width: usize,
    /// Minimum indentation for a right-justified date line
    pub date_indent_threshold: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tab_width: 2,
            date_indent_threshold: 15,
        }
    }
}

/// One family of turn-boundary patterns, scanned independently over the
/// whole transcript
pub trait PatternFamily {
    /// Short name used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Collect every match in the transcript, in scan order
    fn scan(&self, text: &str, config: &ScanConfig) -> Vec<Event>;
}

/// All pattern families, in the order their matches are concatenated before
/// the merge sort
pub fn catalog() -> Vec<Box<dyn PatternFamily>> {
    vec![
        Box::new(SpeakerStart),
        Box::new(RuleLine),
        Box::new(DocHeader),
        Box::new(DeepIndentHeading),
        Box::new(RightJustifiedDate),
        Box::new(NoteMarker),
    ]
}
