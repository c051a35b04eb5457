//! Node variants
//!
//!     A node is one of three things: a scalar (text), a sequence (ordered children) or a
//!     mapping (ordered key/value pairs). Collections refer to their children by [`NodeId`],
//!     an index into the owning [`NodeTree`](super::NodeTree). That indirection is what lets a
//!     collection contain itself, or share a child with another collection, without the node
//!     side needing reference counting.

use super::style::{FlowStyle, ScalarStyle};
use super::tag::Tag;
use std::fmt;

/// Index of a node inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarNode {
    pub tag: Tag,
    pub value: String,
    pub style: ScalarStyle,
}

impl ScalarNode {
    pub fn new(tag: Tag, value: impl Into<String>, style: ScalarStyle) -> Self {
        Self {
            tag,
            value: value.into(),
            style,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.style.is_plain()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceNode {
    pub tag: Tag,
    pub items: Vec<NodeId>,
    pub style: FlowStyle,
}

impl SequenceNode {
    pub fn new(tag: Tag, style: FlowStyle) -> Self {
        Self {
            tag,
            items: Vec::new(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappingNode {
    pub tag: Tag,
    pub entries: Vec<(NodeId, NodeId)>,
    pub style: FlowStyle,
}

impl MappingNode {
    pub fn new(tag: Tag, style: FlowStyle) -> Self {
        Self {
            tag,
            entries: Vec::new(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(ScalarNode),
    Sequence(SequenceNode),
    Mapping(MappingNode),
}

impl Node {
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "Scalar",
            Node::Sequence(_) => "Sequence",
            Node::Mapping(_) => "Mapping",
        }
    }

    pub fn tag(&self) -> &Tag {
        match self {
            Node::Scalar(scalar) => &scalar.tag,
            Node::Sequence(seq) => &seq.tag,
            Node::Mapping(map) => &map.tag,
        }
    }

    /// Collection style, `None` for scalars
    pub fn flow_style(&self) -> Option<FlowStyle> {
        match self {
            Node::Scalar(_) => None,
            Node::Sequence(seq) => Some(seq.style),
            Node::Mapping(map) => Some(map.style),
        }
    }

    pub(crate) fn set_flow_style(&mut self, style: FlowStyle) {
        match self {
            Node::Scalar(_) => {}
            Node::Sequence(seq) => seq.style = style,
            Node::Mapping(map) => map.style = style,
        }
    }

    /// A scalar written without quoting or block indicators
    pub fn is_plain_scalar(&self) -> bool {
        matches!(self, Node::Scalar(scalar) if scalar.is_plain())
    }

    pub fn as_scalar(&self) -> Option<&ScalarNode> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceNode> {
        match self {
            Node::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MappingNode> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Ids of every direct child, keys before values for mappings
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::Scalar(_) => Vec::new(),
            Node::Sequence(seq) => seq.items.clone(),
            Node::Mapping(map) => map
                .entries
                .iter()
                .flat_map(|&(key, value)| [key, value])
                .collect(),
        }
    }
}

impl From<ScalarNode> for Node {
    fn from(scalar: ScalarNode) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<SequenceNode> for Node {
    fn from(seq: SequenceNode) -> Self {
        Node::Sequence(seq)
    }
}

impl From<MappingNode> for Node {
    fn from(map: MappingNode) -> Self {
        Node::Mapping(map)
    }
}
