//! The finished node tree handed to the emitter
//!
//!     Nodes are stored in an arena in creation order. Each slot carries the node and a
//!     `shared` flag, set when the representer reached the node through the same host value
//!     more than once. The emitter uses that flag to decide where an explicit shared-reference
//!     marker goes; naming the marker is its business, not ours.

use super::node::{Node, NodeId};
use super::style::FlowStyle;

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    node: Node,
    shared: bool,
}

/// Arena used while a tree is under construction
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            shared: false,
        });
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.slots[id.0].node
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.0].node
    }

    pub(crate) fn mark_shared(&mut self, id: NodeId) {
        self.slots[id.0].shared = true;
    }

    pub(crate) fn finish(self, root: NodeId) -> NodeTree {
        debug_assert!(
            self.slots
                .iter()
                .all(|slot| !slot.node.flow_style().is_some_and(FlowStyle::is_auto)),
            "every collection must have a resolved style before the tree is handed out"
        );
        NodeTree {
            slots: self.slots,
            root,
        }
    }
}

/// A represented value graph
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTree {
    slots: Vec<Slot>,
    root: NodeId,
}

impl NodeTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &Node {
        self.get(self.root)
    }

    /// Look up a node by id
    ///
    /// Ids are only meaningful for the tree that produced them; an id from another tree
    /// panics when out of range.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.slots[id.0].node
    }

    /// True when the node was reached through the same host value more than once
    pub fn is_shared(&self, id: NodeId) -> bool {
        self.slots[id.0].shared
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All nodes in creation order (the root is always first)
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (NodeId(index), &slot.node))
    }

    pub fn shared_nodes(&self) -> Vec<NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.shared)
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    /// Children of the node at `id`, resolved to nodes
    pub fn children(&self, id: NodeId) -> Vec<&Node> {
        self.get(id)
            .children()
            .into_iter()
            .map(|child| self.get(child))
            .collect()
    }
}
