//! Configuration types for the tree builder

use std::collections::BTreeSet;

/// Entry names skipped at every depth, whether file or directory.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &["node_modules", ".git", ".next"];

/// File suffixes treated as compiled artifacts.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[".pyc", ".pyo"];

/// Exclusion rules and limits for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Exact base names never recorded or descended into.
    pub excluded_names: BTreeSet<String>,
    /// File name suffixes to skip. Directories are never matched against these.
    pub excluded_extensions: Vec<String>,
    /// Skip files whose name starts with a dot.
    pub skip_hidden_files: bool,
    /// Directories at this depth are recorded without listing them.
    /// `None` descends without limit.
    pub max_depth: Option<usize>,
}

impl ScanConfig {
    pub fn with_excluded_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_names.insert(name.into());
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }

    /// Hidden-file and compiled-artifact rules. Only meaningful for files.
    pub fn is_excluded_file(&self, name: &str) -> bool {
        if self.skip_hidden_files && name.starts_with('.') {
            return true;
        }
        self.excluded_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }

    pub(crate) fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_names: DEFAULT_EXCLUDED_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_hidden_files: true,
            max_depth: None,
        }
    }
}
