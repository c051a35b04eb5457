//! Per-call representation state
//!
//!     A [`RepresentContext`] exists for exactly one `represent` call. It owns everything that
//!     changes while a value graph is being walked: the node arena, the identity tracker and the
//!     pointer to the value currently being converted. Converters receive it by `&mut` and use
//!     it to build nodes and to recurse into children.
//!
//!     One conversion goes through these states:
//!
//!         START → IDENTITY_CHECK → HIT → DONE
//!                                → MISS → LOOKUP → NOT_FOUND → ERROR
//!                                                → FOUND → PRE_REGISTER → BUILD_CHILDREN
//!                                                        → RESOLVE_STYLE → DONE
//!
//!     Null skips the identity check and the lookup, it always goes to the null converter.
//!
//!     PRE_REGISTER is the step that makes cycles terminate: a collection is recorded in the
//!     tracker under the current value before any of its children are converted.
//!
//!     The current value belongs to the converter call that set it. A nested `represent_data`
//!     restores it on return, so a converter may convert children before building its own
//!     collection and the collection is still registered under the converter's value. Only
//!     the first collection a converter builds is registered.

use super::data::Data;
use super::registry::Registry;
use super::resolver;
use super::settings::Settings;
use super::standard;
use super::tracker::IdentityTracker;
use crate::error::{RepresentError, RepresentResult};
use crate::nodes::tree::NodeArena;
use crate::nodes::{
    FlowStyle, MappingNode, Node, NodeId, NodeTree, ScalarNode, ScalarStyle, SequenceNode, Tag,
};

pub struct RepresentContext<'r> {
    registry: &'r Registry,
    settings: &'r Settings,
    tracker: IdentityTracker,
    arena: NodeArena,
    current: Option<Data>,
}

impl<'r> RepresentContext<'r> {
    pub(crate) fn new(registry: &'r Registry, settings: &'r Settings) -> Self {
        Self {
            registry,
            settings,
            tracker: IdentityTracker::new(),
            arena: NodeArena::new(),
            current: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// A node built earlier in this call
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    /// Convert one value, reusing the node already built for it if there is one
    pub fn represent_data(&mut self, data: &Data) -> RepresentResult<NodeId> {
        let registry = self.registry;

        if data.is_null() {
            let outer = self.current.take();
            let result = match registry.null_converter() {
                Some(converter) => converter.convert(self, data),
                None => standard::represent_null(self, data),
            };
            self.current = outer;
            return result;
        }

        if let Some(id) = self.tracker.get(data) {
            tracing::trace!(type_name = data.type_name(), node = %id, "identity hit");
            self.arena.mark_shared(id);
            return Ok(id);
        }

        let Some(converter) = registry.lookup(data) else {
            tracing::warn!(type_name = data.type_name(), "no converter for value");
            return Err(RepresentError::not_representable(data.type_name()));
        };

        let outer = self.current.replace(data.clone());
        let result = converter.convert(self, data);
        self.current = outer;
        result
    }

    /// Scalar in the configured default style
    pub fn represent_scalar(&mut self, tag: Tag, value: impl Into<String>) -> NodeId {
        let style = self.settings.default_scalar_style;
        self.represent_scalar_with_style(tag, value, style)
    }

    /// Scalar in exactly `style`
    pub fn represent_scalar_with_style(
        &mut self,
        tag: Tag,
        value: impl Into<String>,
        style: ScalarStyle,
    ) -> NodeId {
        self.arena.push(ScalarNode::new(tag, value, style).into())
    }

    /// Sequence of `items`, registered under the value being converted
    pub fn represent_sequence(
        &mut self,
        tag: Tag,
        items: impl IntoIterator<Item = Data>,
        style: FlowStyle,
    ) -> RepresentResult<NodeId> {
        let id = self
            .arena
            .push(SequenceNode::new(tag, FlowStyle::Auto).into());
        self.pre_register(id);

        let mut children = Vec::new();
        for item in items {
            children.push(self.represent_data(&item)?);
        }

        let computed = resolver::candidate(children.iter().map(|&child| self.arena.get(child)));
        if let Node::Sequence(seq) = self.arena.get_mut(id) {
            seq.items = children;
        }
        self.finish_collection(id, style, computed);
        Ok(id)
    }

    /// Mapping of `entries` in order, registered under the value being converted
    pub fn represent_mapping(
        &mut self,
        tag: Tag,
        entries: impl IntoIterator<Item = (Data, Data)>,
        style: FlowStyle,
    ) -> RepresentResult<NodeId> {
        let id = self
            .arena
            .push(MappingNode::new(tag, FlowStyle::Auto).into());
        self.pre_register(id);

        let mut pairs = Vec::new();
        for (key, value) in entries {
            let key = self.represent_data(&key)?;
            let value = self.represent_data(&value)?;
            pairs.push((key, value));
        }

        let computed = resolver::candidate(
            pairs
                .iter()
                .flat_map(|&(key, value)| [key, value])
                .map(|child| self.arena.get(child)),
        );
        if let Node::Mapping(map) = self.arena.get_mut(id) {
            map.entries = pairs;
        }
        self.finish_collection(id, style, computed);
        Ok(id)
    }

    fn pre_register(&mut self, id: NodeId) {
        if let Some(current) = self.current.take() {
            self.tracker.put(&current, id);
        }
    }

    fn finish_collection(&mut self, id: NodeId, explicit: FlowStyle, computed: FlowStyle) {
        let style = resolver::resolve(explicit, self.settings.default_flow_style, computed);
        tracing::trace!(node = %id, %explicit, %computed, %style, "resolved collection style");
        self.arena.get_mut(id).set_flow_style(style);
    }

    pub(crate) fn finish(self, root: NodeId) -> NodeTree {
        self.arena.finish(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::represent::registry::RegistryBuilder;

    #[test]
    fn test_scalar_uses_default_style() {
        let registry = Registry::builder().build();
        let settings = Settings::builder()
            .default_scalar_style(ScalarStyle::DoubleQuoted)
            .build();
        let mut ctx = RepresentContext::new(&registry, &settings);

        let id = ctx.represent_scalar(Tag::STR, "x");
        let explicit = ctx.represent_scalar_with_style(Tag::STR, "y", ScalarStyle::Literal);

        assert_eq!(
            ctx.node(id).as_scalar().map(|s| s.style),
            Some(ScalarStyle::DoubleQuoted)
        );
        assert_eq!(
            ctx.node(explicit).as_scalar().map(|s| s.style),
            Some(ScalarStyle::Literal)
        );
    }

    #[test]
    fn test_null_without_null_converter() {
        let registry = Registry::builder().build();
        let settings = Settings::default();
        let mut ctx = RepresentContext::new(&registry, &settings);

        let id = ctx.represent_data(&Data::null()).expect("null is representable");
        let scalar = ctx.node(id).as_scalar().expect("scalar");
        assert_eq!(scalar.tag, Tag::NULL);
        assert_eq!(scalar.value, "null");
    }

    #[test]
    fn test_collection_is_registered_before_children() {
        let registry = Registry::builder()
            .register_exact::<crate::represent::data::List>(|ctx, data| {
                let items = data.as_list().map(|list| list.items()).unwrap_or_default();
                ctx.represent_sequence(Tag::SEQ, items, FlowStyle::Auto)
            })
            .build();
        let settings = Settings::default();
        let mut ctx = RepresentContext::new(&registry, &settings);

        let data = Data::list([]);
        if let Some(list) = data.as_list() {
            list.push(data.clone());
        }
        let id = ctx.represent_data(&data).expect("cycle terminates");

        let seq = ctx.node(id).as_sequence().expect("sequence");
        assert_eq!(seq.items, vec![id]);
        assert_eq!(seq.style, FlowStyle::Block);
        assert_eq!(ctx.tracker.len(), 1);
    }

    struct Labelled {
        label: Data,
        items: Data,
    }

    #[test]
    fn test_children_converted_first_do_not_steal_registration() {
        let registry = RegistryBuilder::standard()
            .register_exact::<Labelled>(|ctx, data| {
                let labelled = data
                    .downcast_ref::<Labelled>()
                    .ok_or_else(|| RepresentError::not_representable(data.type_name()))?;
                let label = ctx.represent_data(&labelled.label)?;
                let tag = ctx
                    .node(label)
                    .as_scalar()
                    .map(|scalar| Tag::new(format!("!{}", scalar.value)))
                    .unwrap_or(Tag::SEQ);
                let items = labelled.items.as_list().map(|list| list.items()).unwrap_or_default();
                ctx.represent_sequence(tag, items, FlowStyle::Auto)
            })
            .build();
        let settings = Settings::default();
        let mut ctx = RepresentContext::new(&registry, &settings);

        let label = Data::from("box");
        let labelled = Data::new(Labelled {
            label: label.clone(),
            items: Data::list([Data::from(1i64)]),
        });
        let first = ctx.represent_data(&labelled).expect("representable");
        let second = ctx.represent_data(&labelled).expect("representable");

        assert_eq!(first, second);
        assert_eq!(ctx.node(first).tag(), &Tag::new("!box"));
        assert!(ctx.tracker.get(&label).is_none());
        assert_eq!(ctx.tracker.get(&labelled), Some(first));
    }
}
