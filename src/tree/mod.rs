//! Directory scanning
//!
//! `TreeBuilder` walks a root path depth-first and produces a `Node` tree,
//! applying the exclusion rules in `ScanConfig`. The tree is built once and
//! only read afterwards by the output formatters.

mod builder;
mod config;
mod node;

pub use builder::{DiagnosticKind, Scan, ScanDiagnostic, TreeBuilder};
pub use config::{DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_EXCLUDED_NAMES, ScanConfig};
pub use node::Node;
