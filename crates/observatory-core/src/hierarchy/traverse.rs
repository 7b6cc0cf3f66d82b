//! Depth-ordered flattening of the class tree.

use std::collections::VecDeque;

use super::ClassNode;

/// One node occurrence together with its nesting depth under `children`.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Root is 0; each `children` level adds one.
    pub depth: usize,
    pub node: &'a ClassNode,
}

/// Flatten the tree into visits ordered by depth.
///
/// Within one depth, nodes keep their left-to-right document order. This is
/// the order a post-order depth-first walk produces once stably sorted by
/// depth, so every node is visited before any of its children.
pub fn flatten(root: &ClassNode) -> Vec<Visit<'_>> {
    let mut visits = Vec::new();
    let mut queue = VecDeque::from([Visit { depth: 0, node: root }]);

    while let Some(visit) = queue.pop_front() {
        queue.extend(visit.node.children.iter().map(|child| Visit {
            depth: visit.depth + 1,
            node: child,
        }));
        visits.push(visit);
    }

    visits
}
