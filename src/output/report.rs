//! Report artifacts: the JSON snapshot and the markdown document

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::tree::Node;

use super::json::to_json_string;
use super::markdown::{MarkdownRenderer, RenderStyle};

pub const DEFAULT_OUTPUT_DIR: &str = "doc";
pub const DEFAULT_JSON_NAME: &str = "project_structure.json";
pub const DEFAULT_MARKDOWN_NAME: &str = "project_structure.md";
pub const DEFAULT_TITLE: &str = "Project Structure";
pub const DEFAULT_HEADING: &str = "Complete Tree";

/// Where and how the two reports are written.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub json_name: String,
    pub markdown_name: String,
    pub title: String,
    pub heading: String,
    pub style: RenderStyle,
}

impl ReportConfig {
    /// Default configuration writing into `<root>/doc`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            ..Default::default()
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_name)
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(&self.markdown_name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            json_name: DEFAULT_JSON_NAME.to_string(),
            markdown_name: DEFAULT_MARKDOWN_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            style: RenderStyle::default(),
        }
    }
}

/// Paths of the files written by `write_reports`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Title line, heading line, then the rendered tree, joined by newlines.
/// Each header carries its own trailing newline, leaving a blank line after it.
pub fn markdown_document(node: &Node, config: &ReportConfig) -> String {
    let mut lines = vec![
        format!("# {}\n", config.title),
        format!("## {}\n", config.heading),
    ];
    lines.extend(MarkdownRenderer::new(config.style).render(node, 0));
    lines.join("\n")
}

/// Write both reports, creating the output directory if needed.
pub fn write_reports(node: &Node, config: &ReportConfig) -> Result<ReportPaths> {
    fs::create_dir_all(&config.output_dir).map_err(|e| Error::io(&config.output_dir, e))?;

    let json_path = config.json_path();
    let json = to_json_string(node)?;
    fs::write(&json_path, json).map_err(|e| Error::io(&json_path, e))?;
    info!(path = %json_path.display(), "wrote JSON report");

    let markdown_path = config.markdown_path();
    fs::write(&markdown_path, markdown_document(node, config))
        .map_err(|e| Error::io(&markdown_path, e))?;
    info!(path = %markdown_path.display(), "wrote markdown report");

    Ok(ReportPaths {
        json: json_path,
        markdown: markdown_path,
    })
}
