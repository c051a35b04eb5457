//! Node model
//!
//!     The uniform, format-agnostic intermediate representation produced by the representer and
//!     consumed by an emitter. See [`node`] for the variants and [`tree`] for the arena that holds
//!     them.

pub mod node;
pub mod style;
pub mod tag;
pub mod tree;
pub mod treeviz;

pub use node::{MappingNode, Node, NodeId, ScalarNode, SequenceNode};
pub use style::{FlowStyle, ScalarStyle};
pub use tag::Tag;
pub use tree::NodeTree;
pub use treeviz::to_treeviz_str;
