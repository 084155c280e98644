//! Dirmap - snapshot a project's directory layout as JSON and markdown

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    MarkdownRenderer, RenderStyle, ReportConfig, ReportPaths, decode, encode, format_size,
    markdown_document, to_json_string, write_reports,
};
pub use tree::{DiagnosticKind, Node, Scan, ScanConfig, ScanDiagnostic, TreeBuilder};
