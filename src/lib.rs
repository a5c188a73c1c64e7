pub mod annotate;
pub mod assembler;
pub mod cleanup;
pub mod io;
pub mod models;
pub mod patterns;
pub mod pipeline;
pub mod scanner;
pub mod stripper;
pub mod titles;

pub use assembler::assemble_turns;
pub use cleanup::{filter_boilerplate, remove_title_echo, scrub_page_headers};
pub use io::{extract_date_from_filename, read_transcript, HumanDocument, MachineDocument};
pub use models::{Event, EventKind, Section, SectionError, Span, TitleBlock, Turn};
pub use patterns::{PatternFamily, ScanConfig};
pub use pipeline::{segment, SegmentConfig, SegmentResult};
pub use scanner::{prepare_transcript, scan_events};
pub use stripper::strip_artifacts;
pub use titles::{extract_sections, find_title_blocks};
