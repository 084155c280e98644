//! Markdown output formatting
//!
//! This module provides `MarkdownRenderer` which outputs a scanned tree as a
//! nested markdown list, suitable for documentation.

use crate::tree::Node;

use super::utils::{format_size, sorted_children};

const INDENT: &str = "  ";

/// Line markers used for directories and files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// `- 📁 **src/**` and ``- 📄 `main.rs` (12 bytes)``
    #[default]
    Markdown,
    /// `- [dir] src/` and `- [file] main.rs (12 bytes)`
    Plain,
}

impl RenderStyle {
    fn dir_line(self, name: &str) -> String {
        match self {
            RenderStyle::Markdown => format!("- 📁 **{}/**", name),
            RenderStyle::Plain => format!("- [dir] {}/", name),
        }
    }

    fn file_line(self, name: &str, size: &str) -> String {
        match self {
            RenderStyle::Markdown => format!("- 📄 `{}` ({})", name, size),
            RenderStyle::Plain => format!("- [file] {} ({})", name, size),
        }
    }
}

/// Renders a tree as indented list lines, directories first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    style: RenderStyle,
}

impl MarkdownRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Render `node` and everything below it, starting at indentation `level`.
    pub fn render(&self, node: &Node, level: usize) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(node, level, &mut lines);
        lines
    }

    fn render_into(&self, node: &Node, level: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(level);
        let name = node.name();

        match node {
            Node::File { size_bytes, .. } => {
                let line = self.style.file_line(&name, &format_size(*size_bytes));
                lines.push(format!("{}{}", indent, line));
            }
            Node::Dir { .. } => {
                lines.push(format!("{}{}", indent, self.style.dir_line(&name)));
                for child in sorted_children(node) {
                    self.render_into(child, level + 1, lines);
                }
            }
        }
    }
}
