//! JSON encoding of the scanned tree

use serde_json::Value;

use crate::error::Result;
use crate::tree::Node;

/// Encode the full tree as a JSON value, preserving child order.
pub fn encode(node: &Node) -> Result<Value> {
    Ok(serde_json::to_value(node)?)
}

/// Pretty-print the tree with two-space indentation. Non-ASCII text is
/// written as UTF-8, not escaped.
pub fn to_json_string(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Rebuild a tree from its JSON encoding.
pub fn decode(json: &str) -> Result<Node> {
    Ok(serde_json::from_str(json)?)
}
