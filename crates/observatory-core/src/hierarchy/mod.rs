//! Schema.org class hierarchy as loaded from the usage-count document.
//!
//! The document is a rooted tree of JSON objects:
//!
//! ```json
//! {
//!   "@id": "schema:Thing",
//!   "value": 29,
//!   "children": [
//!     { "@id": "schema:CreativeWork", "value": 12, "children": [] },
//!     { "@id": "schema:Person" }
//!   ]
//! }
//! ```
//!
//! Any other keys on a node are ignored. A missing (or `null`) `value` is a
//! count of zero.

mod error;
mod traverse;

pub use error::HierarchyError;
pub use traverse::{flatten, Visit};

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

/// A single class in the hierarchy, with its subclasses.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassNode {
    /// Class identifier, e.g. `schema:Product`.
    #[serde(rename = "@id")]
    pub id: String,
    /// Number of typed entities counted for this class.
    #[serde(default)]
    value: Option<u64>,
    /// Direct subclasses, in document order.
    #[serde(default)]
    pub children: Vec<ClassNode>,
}

impl ClassNode {
    /// Create a leaf node.
    pub fn new(id: impl Into<String>, value: Option<u64>) -> Self {
        Self {
            id: id.into(),
            value,
            children: Vec::new(),
        }
    }

    /// Attach a subclass.
    pub fn with_child(mut self, child: ClassNode) -> Self {
        self.children.push(child);
        self
    }

    /// Entity count, zero when the source omitted it.
    pub fn value(&self) -> u64 {
        self.value.unwrap_or(0)
    }
}

/// A parsed and structurally checked class hierarchy.
#[derive(Debug, Clone)]
pub struct ClassHierarchy {
    root: ClassNode,
}

impl ClassHierarchy {
    /// Wrap an already-built tree, applying the same checks as parsing.
    pub fn new(root: ClassNode) -> Result<Self, HierarchyError> {
        check_node(&root, "$")?;
        Ok(Self { root })
    }

    /// Parse a hierarchy from JSON text.
    pub fn from_json(text: &str) -> Result<Self, HierarchyError> {
        let root: ClassNode = serde_json::from_str(text)?;
        Self::new(root)
    }

    /// Load a hierarchy from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HierarchyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| HierarchyError::io(path, e))?;
        let hierarchy = Self::from_json(&text)?;

        info!(
            path = %path.display(),
            nodes = hierarchy.node_count(),
            classes = hierarchy.distinct_ids().len(),
            "loaded class hierarchy"
        );

        Ok(hierarchy)
    }

    pub fn root(&self) -> &ClassNode {
        &self.root
    }

    /// Number of node occurrences, duplicates included.
    pub fn node_count(&self) -> usize {
        flatten(&self.root).len()
    }

    /// Distinct class identifiers reachable from the root, root included.
    pub fn distinct_ids(&self) -> HashSet<&str> {
        flatten(&self.root)
            .into_iter()
            .map(|visit| visit.node.id.as_str())
            .collect()
    }
}

/// Reject identifiers the chart cannot represent.
///
/// An empty identifier would be indistinguishable from the root sentinel
/// used for parent references.
fn check_node(node: &ClassNode, path: &str) -> Result<(), HierarchyError> {
    if node.id.trim().is_empty() {
        return Err(HierarchyError::malformed(
            format!("{}.@id", path),
            "class identifier must not be empty",
        ));
    }

    for (i, child) in node.children.iter().enumerate() {
        check_node(child, &format!("{}.children[{}]", path, i))?;
    }

    Ok(())
}
