//! TreeBuilder - scans a path into an in-memory `Node` tree

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

use super::config::ScanConfig;
use super::node::Node;

/// What went wrong at a recovered path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Listing the directory failed; it keeps the children read so far.
    UnreadableDirectory,
    /// The entry name is not valid UTF-8 and was left out of the tree.
    NonUtf8Name,
}

/// A failure the scan recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDiagnostic {
    pub kind: DiagnosticKind,
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            DiagnosticKind::UnreadableDirectory => "cannot read directory",
            DiagnosticKind::NonUtf8Name => "skipping non UTF-8 name",
        };
        write!(f, "{} '{}': {}", what, self.path.display(), self.message)
    }
}

/// Result of a scan: the tree plus every recovered failure.
#[derive(Debug, Clone)]
pub struct Scan {
    pub root: Node,
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Depth-first, single-threaded directory scanner.
///
/// Children are recorded in directory-listing order. Symlinks are followed,
/// so a link cycle only terminates through `ScanConfig::max_depth` or an OS
/// error on an overly long path.
pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Build the tree for `root`, discarding diagnostics.
    pub fn build(&self, root: &Path) -> Result<Node> {
        self.scan(root).map(|scan| scan.root)
    }

    /// Build the tree for `root`.
    ///
    /// Fails only if `root` itself cannot be stat'ed. Listing failures below
    /// it are logged, recorded in `Scan::diagnostics`, and leave the affected
    /// directory with the children gathered before the failure. Entries with
    /// non UTF-8 names are skipped the same way, so every recorded path can
    /// be encoded.
    pub fn scan(&self, root: &Path) -> Result<Scan> {
        let metadata = fs::metadata(root).map_err(|e| Error::io(root, e))?;
        let mut diagnostics = Vec::new();

        let root = if metadata.is_file() {
            Node::File {
                path: root.to_path_buf(),
                size_bytes: metadata.len(),
            }
        } else {
            self.build_dir(root, 0, &mut diagnostics)
        };

        Ok(Scan { root, diagnostics })
    }

    fn build_dir(
        &self,
        path: &Path,
        depth: usize,
        diagnostics: &mut Vec<ScanDiagnostic>,
    ) -> Node {
        let mut children = Vec::new();

        if self.config.at_max_depth(depth) {
            debug!(path = %path.display(), depth, "max depth reached, not descending");
        } else {
            debug!(path = %path.display(), depth, "scanning directory");
            let listed = match fs::read_dir(path) {
                Ok(entries) => {
                    let entries = entries.map(|e| e.map(|e| (e.file_name(), e.path())));
                    self.collect_children(entries, depth, &mut children, diagnostics)
                }
                Err(e) => Err(e),
            };
            if let Err(e) = listed {
                warn!(path = %path.display(), error = %e, "cannot read directory");
                diagnostics.push(ScanDiagnostic {
                    kind: DiagnosticKind::UnreadableDirectory,
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }

        Node::Dir {
            path: path.to_path_buf(),
            children,
        }
    }

    /// Record `(name, path)` entries of one directory. Any error ends the
    /// listing; `children` keeps what was already pushed.
    fn collect_children<I>(
        &self,
        entries: I,
        depth: usize,
        children: &mut Vec<Node>,
        diagnostics: &mut Vec<ScanDiagnostic>,
    ) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<(OsString, PathBuf)>>,
    {
        for entry in entries {
            let (file_name, entry_path) = entry?;
            let Some(name) = file_name.to_str() else {
                warn!(path = %entry_path.display(), "skipping non UTF-8 name");
                diagnostics.push(ScanDiagnostic {
                    kind: DiagnosticKind::NonUtf8Name,
                    path: entry_path,
                    message: "name is not valid UTF-8".to_string(),
                });
                continue;
            };

            if self.config.is_excluded_name(name) {
                trace!(name, "skipping excluded name");
                continue;
            }

            if entry_path.is_file() {
                if self.config.is_excluded_file(name) {
                    trace!(name, "skipping excluded file");
                    continue;
                }
                let size_bytes = fs::metadata(&entry_path)?.len();
                children.push(Node::File {
                    path: entry_path,
                    size_bytes,
                });
            } else {
                children.push(self.build_dir(&entry_path, depth + 1, diagnostics));
            }
        }

        Ok(())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}
