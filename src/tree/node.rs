//! In-memory tree produced by a scan

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;

/// A scanned file or directory.
///
/// Children keep the order the directory listing returned them in. Sorting
/// happens only when rendering, so encoding a tree never reorders it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum Node {
    File { path: PathBuf, size_bytes: u64 },
    Dir { path: PathBuf, children: Vec<Node> },
}

impl Node {
    pub fn path(&self) -> &Path {
        match self {
            Node::File { path, .. } => path,
            Node::Dir { path, .. } => path,
        }
    }

    /// Last path component, or the whole path when there is none (e.g. `/`).
    pub fn name(&self) -> Cow<'_, str> {
        let path = self.path();
        match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => path.to_string_lossy(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    pub fn size_bytes(&self) -> Option<u64> {
        match self {
            Node::File { size_bytes, .. } => Some(*size_bytes),
            Node::Dir { .. } => None,
        }
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Dir { children, .. } => children,
        }
    }

    /// Number of files in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Node::File { .. } => 1,
            Node::Dir { children, .. } => children.iter().map(Node::file_count).sum(),
        }
    }

    /// Number of directories below this node, not counting itself.
    pub fn dir_count(&self) -> usize {
        self.children()
            .iter()
            .filter(|c| c.is_dir())
            .map(|c| 1 + c.dir_count())
            .sum()
    }

    /// Sum of all file sizes in this subtree.
    pub fn total_size(&self) -> u64 {
        match self {
            Node::File { size_bytes, .. } => *size_bytes,
            Node::Dir { children, .. } => children.iter().map(Node::total_size).sum(),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 3)?;
        match self {
            Node::File { path, size_bytes } => {
                state.serialize_field("path", path)?;
                state.serialize_field("is_file", &true)?;
                state.serialize_field("size", size_bytes)?;
            }
            Node::Dir { path, children } => {
                state.serialize_field("path", path)?;
                state.serialize_field("is_file", &false)?;
                state.serialize_field("children", children)?;
            }
        }
        state.end()
    }
}

/// Wire shape shared by both variants, checked before becoming a `Node`.
#[derive(Deserialize)]
struct RawNode {
    path: PathBuf,
    is_file: bool,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    children: Option<Vec<Node>>,
}

impl TryFrom<RawNode> for Node {
    type Error = Error;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let reason = match (raw.is_file, raw.size, raw.children) {
            (true, Some(size_bytes), None) => {
                return Ok(Node::File {
                    path: raw.path,
                    size_bytes,
                });
            }
            (false, None, Some(children)) => {
                return Ok(Node::Dir {
                    path: raw.path,
                    children,
                });
            }
            (true, None, _) => "file is missing `size`",
            (true, Some(_), Some(_)) => "file must not have `children`",
            (false, _, None) => "directory is missing `children`",
            (false, Some(_), Some(_)) => "directory must not have `size`",
        };
        Err(Error::InvalidNode {
            path: raw.path,
            reason: reason.to_string(),
        })
    }
}
