use crate::models::{Event, EventKind, Span, Turn};
use crate::stripper::strip_artifacts;

/// Assembler state: either between turns or inside one
enum State {
    Idle,
    InTurn { speaker: String, text_start: usize },
}

/// Consume the ordered event timeline and emit speech turns.
///
/// A `Start` event opens a turn (closing any current one first); an `End`
/// event closes the current turn and is ignored when no turn is open. A
/// turn still open at end of input is closed at the transcript's end.
/// Emitted turns are non-overlapping and ordered by span start.
pub fn assemble_turns(text: &str, events: &[Event]) -> Vec<Turn> {
    let mut turns = Vec::new();
    let mut state = State::Idle;

    for event in events {
        match (&state, &event.kind) {
            (State::Idle, EventKind::Start { label }) => {
                state = State::InTurn {
                    speaker: label.clone(),
                    text_start: event.end,
                };
            }
            (State::InTurn { speaker, text_start }, EventKind::Start { label }) => {
                turns.push(close_turn(text, speaker, *text_start, event.start));
                state = State::InTurn {
                    speaker: label.clone(),
                    text_start: event.end,
                };
            }
            (State::InTurn { speaker, text_start }, EventKind::End) => {
                turns.push(close_turn(text, speaker, *text_start, event.start));
                state = State::Idle;
            }
            // Stray terminators outside any turn are not errors
            (State::Idle, EventKind::End) => {}
        }
    }

    if let State::InTurn { speaker, text_start } = state {
        turns.push(close_turn(text, &speaker, text_start, text.len()));
    }

    turns
}

fn close_turn(text: &str, speaker: &str, text_start: usize, boundary: usize) -> Turn {
    let end = boundary.max(text_start);
    let raw = text[text_start..end].trim();
    let cleaned = strip_artifacts(raw).trim().to_string();
    Turn::new(speaker.to_string(), Span::new(text_start, end), cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::ScanConfig;
    use crate::scanner::scan_events;

    fn run(text: &str) -> Vec<Turn> {
        assemble_turns(text, &scan_events(text, &ScanConfig::default()))
    }

    #[test]
    fn test_two_consecutive_speakers() {
        let turns = run("  Mr. SMITH. This is a test.\n  Mr. JONES. A reply.\n");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, "Mr. SMITH");
        assert_eq!(turns[0].text, "This is a test.");
        assert_eq!(turns[1].speaker, "Mr. JONES");
        assert_eq!(turns[1].text, "A reply.");
    }

    #[test]
    fn test_rule_line_closes_turn_without_opening_one() {
        let text = "  Mr. SMITH. Some remarks.\n____________________\nunattributed text\n";
        let turns = run(text);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].text, "Some remarks.");
        // The turn ends at the rule line's start offset
        assert_eq!(turns[0].span.end, text.find("____").unwrap());
    }

    #[test]
    fn test_stray_terminator_before_any_speaker_ignored() {
        let turns = run("____________________\n  Mr. SMITH. Hello.\n");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, "Mr. SMITH");
    }

    #[test]
    fn test_final_turn_closed_at_end_of_input() {
        let turns = run("  Mr. SMITH. Unterminated remarks");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].text, "Unterminated remarks");
    }

    #[test]
    fn test_no_events_yields_no_turns() {
        assert!(run("plain narrative text with no markers\n").is_empty());
    }

    #[test]
    fn test_turns_are_ordered_and_disjoint() {
        let text = concat!(
            "  Mr. SMITH. First remarks.\n",
            "  Mr. JONES. Second remarks.\n",
            "____________________\n",
            "  Ms. DOE. Third remarks.\n",
        );
        let turns = run(text);
        assert_eq!(turns.len(), 3);
        for pair in turns.windows(2) {
            assert!(pair[0].span.start <= pair[1].span.start);
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_speaker_labels_have_no_trailing_period() {
        for turn in run("  Mr. SMITH. One.\n  The SPEAKER pro tempore. Two.\n") {
            assert!(!turn.speaker.ends_with('.'));
        }
    }
}
