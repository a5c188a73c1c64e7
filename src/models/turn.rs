use serde::{Deserialize, Serialize};

use super::Span;

/// One contiguous attributed speech act by a single speaker.
///
/// Spans refer to the prepared transcript the scanner ran over (note blocks
/// removed, non-breaking spaces normalized), not the caller's raw input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique identifier for this turn (UUID)
    pub turn_id: String,
    /// Speaker label as matched, trailing period stripped
    pub speaker: String,
    /// Byte-offset span of the turn's text in the prepared transcript
    pub span: Span,
    /// The spoken text, artifact-stripped and trimmed
    pub text: String,
    /// Debate title assigned by section mapping; empty when no section
    /// contains the turn or title assignment was not requested
    pub title: String,
    /// Chamber in effect at the turn's start offset ("H", "S", or empty)
    pub chamber: String,
    /// Gender tag inferred from the speaker's courtesy title ("M", "F",
    /// or empty)
    pub gender: String,
}

impl Turn {
    /// Create a bare turn; title, chamber, and gender are filled by later
    /// pipeline phases
    pub fn new(speaker: String, span: Span, text: String) -> Self {
        Self {
            turn_id: uuid::Uuid::new_v4().to_string(),
            speaker,
            span,
            text,
            title: String::new(),
            chamber: String::new(),
            gender: String::new(),
        }
    }

    /// Number of whitespace-delimited words in the turn's text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turn_has_empty_annotations() {
        let turn = Turn::new("Mr. SMITH".to_string(), Span::new(0, 10), "Hello.".to_string());
        assert!(turn.title.is_empty());
        assert!(turn.chamber.is_empty());
        assert!(turn.gender.is_empty());
        assert!(!turn.turn_id.is_empty());
    }

    #[test]
    fn test_word_count() {
        let turn = Turn::new(
            "Mr. SMITH".to_string(),
            Span::new(0, 20),
            "I yield back my time.".to_string(),
        );
        assert_eq!(turn.word_count(), 5);
    }
}
