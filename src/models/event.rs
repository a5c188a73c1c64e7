use serde::{Deserialize, Serialize};

/// Half-open byte-offset interval over a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether an offset falls inside this half-open interval
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// What a scanned event marks in the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A new speaker opens a turn; carries the raw matched label
    /// with its trailing period already stripped
    Start { label: String },
    /// A terminator marker closing the current turn, if any
    End,
}

impl EventKind {
    /// Sort rank for events at the same offset: a terminator closes the
    /// current turn before a new speaker can open one.
    fn rank(&self) -> u8 {
        match self {
            EventKind::End => 0,
            EventKind::Start { .. } => 1,
        }
    }
}

/// A single boundary marker found by one pattern family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Byte offset where the matched text begins
    pub start: usize,
    /// Byte offset just past the matched text (equal to `start` for
    /// zero-width markers)
    pub end: usize,
}

impl Event {
    pub fn start_of(label: String, start: usize, end: usize) -> Self {
        Self {
            kind: EventKind::Start { label },
            start,
            end,
        }
    }

    pub fn end_at(start: usize, end: usize) -> Self {
        Self {
            kind: EventKind::End,
            start,
            end,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self.kind, EventKind::Start { .. })
    }
}

/// Sort a merged event list into the single timeline the assembler consumes.
///
/// Primary key is the start offset. At equal offsets `End` sorts before
/// `Start`; beyond that the sort is stable, preserving pattern-scan order.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.start.cmp(&b.start).then(a.kind.rank().cmp(&b.kind.rank())));
}
