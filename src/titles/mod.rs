pub mod detect;
pub mod sections;

pub use detect::find_title_blocks;
pub use sections::{assign_titles, extract_sections, title_for_offset};
