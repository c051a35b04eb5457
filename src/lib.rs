//! # noderep
//!
//! Turns host values into a uniform tree of nodes ready for textual serialization.
//!
//! The representer sits between an application's values and an emitter. It knows nothing about
//! characters, indentation or line width. Its job is to decide, for every reachable value:
//!
//!     - which node it becomes (scalar, sequence or mapping) and with which tag, by looking the
//!       value's runtime type up in a converter registry
//!     - whether it was already seen in this call, in which case the existing node is reused
//!       and flagged as shared (this is also how cycles terminate)
//!     - whether a collection should render in flow or block style
//!
//! Example
//!
//!     let shared = Data::list([Data::from("a"), Data::from("b")]);
//!     let root = Data::map([
//!         (Data::from("first"), shared.clone()),
//!         (Data::from("second"), shared),
//!     ]);
//!     let tree = Representer::with_defaults().represent(&root)?;
//!     print!("{}", tree.to_treeviz());
//!
//!     !!map block (2 entries)
//!     ├─ ? !!str first
//!     ├─ : &1 !!seq flow (2 items)
//!     │ ├─ !!str a
//!     │ └─ !!str b
//!     ├─ ? !!str second
//!     └─ : *1
//!
//! Layout
//!
//!     .
//!     ├── error.rs       # RepresentError
//!     ├── nodes          # Node model, tree arena, treeviz outline
//!     └── represent      # Registry, tracker, style resolver, orchestrator
//!
//! Configuration files are read by the `noderep-config` crate, which produces [`Settings`].

pub mod error;
pub mod nodes;
pub mod represent;

pub use error::{RepresentError, RepresentResult};
pub use nodes::{FlowStyle, Node, NodeId, NodeTree, ScalarStyle, Tag};
pub use represent::{
    Capability, Converter, Data, List, Map, Registry, RegistryBuilder, RepresentContext,
    Representer, Settings,
};
