pub mod input;
pub mod output;

pub use input::{extract_date_from_filename, read_transcript, FileDate};
pub use output::{DocumentMetadata, HumanDocument, MachineDocument, MachineTurn};
