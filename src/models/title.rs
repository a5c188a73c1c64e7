use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Span;

/// A heading-like run of lines naming a debate topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleBlock {
    /// Accumulated block text as it appears in the transcript
    pub text: String,
    /// Span from the first to the last line of the block
    pub span: Span,
}

impl TitleBlock {
    /// Title text with surrounding whitespace trimmed
    pub fn title(&self) -> &str {
        self.text.trim()
    }
}

/// The span of transcript governed by one title block, running from the end
/// of that block to the start of the next
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub span: Span,
}

/// Caller misuse detected during title assignment
#[derive(Debug, Error)]
pub enum SectionError {
    /// The turn's span does not refer to the text the sections were built
    /// from; the caller mixed results from two different segmentation runs.
    #[error("turn span {start}..{end} lies outside the mapped transcript (len {len})")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}
