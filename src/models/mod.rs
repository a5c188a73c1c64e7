pub mod event;
pub mod title;
pub mod turn;

pub use event::{sort_events, Event, EventKind, Span};
pub use title::{Section, SectionError, TitleBlock};
pub use turn::Turn;
