//! The public entry point
//!
//!     A [`Representer`] pairs a shared, frozen [`Registry`] with [`Settings`]. Each call to
//!     [`Representer::represent`] builds a fresh [`RepresentContext`], walks the value graph
//!     and hands back the finished [`NodeTree`]. Nothing from the walk survives the call,
//!     successful or not, because the context is a local of `represent` and the method only
//!     borrows `self`.
//!
//! Resource limits
//!
//!     The walk is recursive: stack depth grows with the nesting depth of the value graph
//!     (cycles and shared values do not add depth, they are cut by identity). Graphs nested
//!     deeply enough to exhaust the thread's stack are not supported.

use super::context::RepresentContext;
use super::data::Data;
use super::registry::Registry;
use super::settings::Settings;
use crate::error::RepresentResult;
use crate::nodes::NodeTree;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Representer {
    registry: Arc<Registry>,
    settings: Settings,
}

impl Representer {
    pub fn new(registry: Arc<Registry>, settings: Settings) -> Self {
        Self { registry, settings }
    }

    /// Standard converters, default settings
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(Registry::with_defaults()), Settings::default())
    }

    /// Standard converters with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(Arc::new(Registry::with_defaults()), settings)
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Represent `data` and everything reachable from it
    ///
    /// All or nothing: on error no tree is returned.
    pub fn represent(&self, data: &Data) -> RepresentResult<NodeTree> {
        tracing::debug!(type_name = data.type_name(), "represent");
        let mut ctx = RepresentContext::new(&self.registry, &self.settings);
        let root = ctx.represent_data(data)?;
        let tree = ctx.finish(root);
        tracing::debug!(
            nodes = tree.len(),
            shared = tree.shared_nodes().len(),
            "represented"
        );
        Ok(tree)
    }
}

impl Default for Representer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
