//! Treeviz outline for node trees
//!
//! One line per node, nesting drawn with box characters. This is a debugging view, not an
//! emitter: it exists so trees can be eyeballed and snapshot-tested.
//!
//! Line format:
//!     <prefix><connector> [&N |*N] <entry marker> <tag> <details>
//!
//! Example:
//!
//!   &1 !!seq block (2 items)
//!   ├─ !!str plain
//!   └─ *1
//!
//! Shared nodes are rendered once, with `&N` in front of them, and every later occurrence is
//! collapsed to `*N`. Numbers follow first appearance in a depth-first walk. Because a node
//! that contains itself is necessarily shared, the collapse also stops the walk on cycles.
//! Mapping children are shown as `?` (key) and `:` (value) lines.

use super::node::{Node, NodeId};
use super::tree::NodeTree;
use std::collections::HashMap;

struct Outline<'t> {
    tree: &'t NodeTree,
    anchors: HashMap<NodeId, usize>,
    output: String,
}

impl<'t> Outline<'t> {
    fn label(&self, id: NodeId) -> String {
        match self.tree.get(id) {
            Node::Scalar(scalar) => {
                let marker = scalar.style.marker();
                let closing = match marker {
                    "'" | "\"" => marker,
                    _ => "",
                };
                format!(
                    "{} {}{}{}",
                    scalar.tag.short(),
                    marker,
                    scalar.value.escape_debug(),
                    closing
                )
            }
            Node::Sequence(seq) => {
                format!("{} {} ({} items)", seq.tag.short(), seq.style, seq.items.len())
            }
            Node::Mapping(map) => format!(
                "{} {} ({} entries)",
                map.tag.short(),
                map.style,
                map.entries.len()
            ),
        }
    }

    /// Writes `id` after `lead` and returns whether its children still need rendering
    fn write_line(&mut self, lead: &str, id: NodeId) -> bool {
        if let Some(number) = self.anchors.get(&id) {
            self.output.push_str(&format!("{}*{}\n", lead, number));
            return false;
        }
        let label = self.label(id);
        if self.tree.is_shared(id) {
            let number = self.anchors.len() + 1;
            self.anchors.insert(id, number);
            self.output
                .push_str(&format!("{}&{} {}\n", lead, number, label));
        } else {
            self.output.push_str(&format!("{}{}\n", lead, label));
        }
        true
    }

    fn children(&mut self, id: NodeId, prefix: &str) {
        let entries: Vec<(&'static str, NodeId)> = match self.tree.get(id) {
            Node::Scalar(_) => Vec::new(),
            Node::Sequence(seq) => seq.items.iter().map(|&item| ("", item)).collect(),
            Node::Mapping(map) => map
                .entries
                .iter()
                .flat_map(|&(key, value)| [("? ", key), (": ", value)])
                .collect(),
        };

        let count = entries.len();
        for (index, (marker, child)) in entries.into_iter().enumerate() {
            let is_last = index == count - 1;
            let connector = if is_last { "└─" } else { "├─" };
            let lead = format!("{}{} {}", prefix, connector, marker);
            if self.write_line(&lead, child) {
                let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
                self.children(child, &child_prefix);
            }
        }
    }
}

/// Render the whole tree, starting at its root
pub fn to_treeviz_str(tree: &NodeTree) -> String {
    let mut outline = Outline {
        tree,
        anchors: HashMap::new(),
        output: String::new(),
    };
    let root = tree.root();
    if outline.write_line("", root) {
        outline.children(root, "");
    }
    outline.output
}

impl NodeTree {
    pub fn to_treeviz(&self) -> String {
        to_treeviz_str(self)
    }
}
