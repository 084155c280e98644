//! Report formatting
//!
//! This module turns a scanned `Node` tree into its two report forms:
//!
//! - `json` - Lossless JSON encoding, in scan order
//! - `markdown` - Indented listing, directories first and sorted by path
//! - `report` - Assembles both into files on disk
//! - `utils` - Size formatting and display ordering

mod json;
mod markdown;
mod report;
mod utils;

pub use json::{decode, encode, to_json_string};
pub use markdown::{MarkdownRenderer, RenderStyle};
pub use report::{
    DEFAULT_HEADING, DEFAULT_JSON_NAME, DEFAULT_MARKDOWN_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_TITLE,
    ReportConfig, ReportPaths, markdown_document, write_reports,
};
pub use utils::{format_size, sorted_children};
