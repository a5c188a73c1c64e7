pub mod boilerplate;
pub mod echo;
pub mod headers;

pub use boilerplate::{filter_boilerplate, line_contains_fuzzy_target, TARGET_PHRASE};
pub use echo::{normalize_for_compare, normalize_ocr, remove_title_echo};
pub use headers::scrub_page_headers;
