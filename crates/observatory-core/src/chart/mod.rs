//! Sunburst chart data for the class hierarchy.
//!
//! The chart is described by four parallel arrays, which is the shape
//! Plotly's sunburst trace expects:
//!
//! - `ids` - unique segment ids (possibly disambiguated)
//! - `names` - the class identifier shown on the segment
//! - `parents` - id of the enclosing segment, `""` for the centre
//! - `values` - entity counts

mod assemble;

pub use assemble::ChartAssembler;

use std::collections::HashSet;

use serde::Serialize;

use crate::hierarchy::ClassHierarchy;

/// Parent reference used for the centre of the sunburst.
pub const ROOT_PARENT: &str = "";

/// Whether a row stands for a class itself or for one of its parent edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Container,
    Edge,
}

/// A class occurrence positioned in the hierarchy.
///
/// Two nodes describe the same class when their `id`s match; the assembler
/// deduplicates on that key alone.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: String,
    /// Depth the node was registered at. For edges this is the parent's depth.
    pub generation: usize,
    /// `None` for containers.
    pub parent: Option<String>,
    pub value: u64,
    pub kind: RecordKind,
}

/// One row of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRecord {
    /// Unique segment id.
    pub id: String,
    /// Original class identifier.
    pub name: String,
    /// Segment id of the parent, [`ROOT_PARENT`] for containers.
    pub parent: String,
    pub value: u64,
    pub kind: RecordKind,
}

impl ChartRecord {
    /// Whether the segment id had to be rewritten to stay unique.
    pub fn is_disambiguated(&self) -> bool {
        self.id != self.name
    }
}

/// Parallel arrays ready to hand to the sunburst renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub ids: Vec<String>,
    pub names: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartData {
    /// Flatten and assemble a whole hierarchy.
    pub fn from_hierarchy(hierarchy: &ClassHierarchy) -> Self {
        ChartAssembler::new().assemble(hierarchy.root()).into()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Parent references that do not name any segment id.
    ///
    /// Empty for anything produced by [`ChartAssembler`]; useful as a sanity
    /// check on hand-edited chart data.
    pub fn dangling_parents(&self) -> Vec<&str> {
        let ids: HashSet<&str> = self.ids.iter().map(String::as_str).collect();
        self.parents
            .iter()
            .map(String::as_str)
            .filter(|parent| *parent != ROOT_PARENT && !ids.contains(parent))
            .collect()
    }
}

impl From<Vec<ChartRecord>> for ChartData {
    fn from(records: Vec<ChartRecord>) -> Self {
        let mut data = ChartData::default();
        for record in records {
            data.ids.push(record.id);
            data.names.push(record.name);
            data.parents.push(record.parent);
            data.values.push(record.value);
        }
        data
    }
}
