//! Shared helpers for output formatting

use crate::tree::Node;

const KB: u64 = 1024;

/// Format a byte count: `"<N> bytes"` below one KiB, else KiB to one decimal.
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} bytes", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    }
}

/// Children in display order: directories before files, then by full path.
/// The node itself is left untouched.
pub fn sorted_children(node: &Node) -> Vec<&Node> {
    let mut children: Vec<&Node> = node.children().iter().collect();
    children.sort_by(|a, b| {
        (a.is_file(), a.path().as_os_str()).cmp(&(b.is_file(), b.path().as_os_str()))
    });
    children
}
