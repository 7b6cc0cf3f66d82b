//! Conversion from the flattened hierarchy to chart rows.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{ChartRecord, RecordKind, TreeNode, ROOT_PARENT};
use crate::hierarchy::{flatten, ClassNode};

// =============================================================================
// Chart Assembler
// =============================================================================

/// Builder turning a class tree into unique chart rows.
///
/// Every visit registers the node as a container unless its class is already
/// on the chart, then emits one edge per child. A class that shows up under
/// several parents therefore gets one segment per parent edge.
pub struct ChartAssembler<'a> {
    nodes: Vec<TreeNode>,
    registered: HashSet<&'a str>,
}

impl<'a> ChartAssembler<'a> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            registered: HashSet::new(),
        }
    }

    /// Assemble rows for the tree rooted at `root`.
    pub fn assemble(mut self, root: &'a ClassNode) -> Vec<ChartRecord> {
        for visit in flatten(root) {
            self.add_container(visit.node, visit.depth);

            for child in &visit.node.children {
                self.add_edge(child, visit.node, visit.depth);
            }
        }

        let records = Self::assign_display_ids(self.nodes);

        info!(
            rows = records.len(),
            classes = self.registered.len(),
            disambiguated = records.iter().filter(|r| r.is_disambiguated()).count(),
            "assembled sunburst chart"
        );

        records
    }

    // =========================================================================
    // Node Registration
    // =========================================================================

    /// Register a class as a container, first registration wins.
    fn add_container(&mut self, node: &'a ClassNode, depth: usize) {
        if !self.registered.insert(node.id.as_str()) {
            debug!(class = %node.id, depth, "class already on chart, skipping container");
            return;
        }

        self.nodes.push(TreeNode {
            id: node.id.clone(),
            generation: depth,
            parent: None,
            value: node.value(),
            kind: RecordKind::Container,
        });
    }

    /// Register one parent-to-child edge. Edges are never deduplicated.
    fn add_edge(&mut self, child: &'a ClassNode, parent: &ClassNode, depth: usize) {
        self.registered.insert(child.id.as_str());

        self.nodes.push(TreeNode {
            id: child.id.clone(),
            generation: depth,
            parent: Some(parent.id.clone()),
            value: child.value(),
            kind: RecordKind::Edge,
        });
    }

    // =========================================================================
    // Display Ids
    // =========================================================================

    /// Give every node a segment id nobody has taken yet.
    ///
    /// The first holder of a class keeps the bare identifier. Later ones
    /// become `"{id} {parent} {generation}"`, with a ` #n` counter appended
    /// if even that is taken.
    fn assign_display_ids(nodes: Vec<TreeNode>) -> Vec<ChartRecord> {
        let mut taken: HashSet<String> = HashSet::with_capacity(nodes.len());

        nodes
            .into_iter()
            .map(|node| {
                let id = Self::unique_id(&node, &taken);
                taken.insert(id.clone());

                ChartRecord {
                    id,
                    name: node.id,
                    parent: node.parent.unwrap_or_else(|| ROOT_PARENT.to_string()),
                    value: node.value,
                    kind: node.kind,
                }
            })
            .collect()
    }

    fn unique_id(node: &TreeNode, taken: &HashSet<String>) -> String {
        if !taken.contains(&node.id) {
            return node.id.clone();
        }

        let base = match &node.parent {
            Some(parent) => format!("{} {} {}", node.id, parent, node.generation),
            None => node.id.clone(),
        };
        if !taken.contains(&base) {
            return base;
        }

        (2..)
            .map(|n| format!("{} #{}", base, n))
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or(base)
    }
}

impl Default for ChartAssembler<'_> {
    fn default() -> Self {
        Self::new()
    }
}
