//! Converter registry
//!
//!     Maps runtime value types to the converters that turn them into nodes. There are two
//!     tiers:
//!
//!         - exact entries, keyed by [`TypeKey`]: used only when a value's runtime type is
//!           exactly that type
//!         - fallback entries, an ordered list of ([`Capability`], converter) pairs: scanned
//!           in registration order when there is no exact entry, first match wins
//!
//!     Exact always beats fallback. Fallback order matters because capabilities can overlap
//!     (a type can be both "list-like" and "set-like"); whichever was registered first is tried
//!     first.
//!
//!     Null has no runtime type, so it gets its own slot instead of an entry.
//!
//!     The registry is assembled with a [`RegistryBuilder`] and frozen by
//!     [`RegistryBuilder::build`]. A built [`Registry`] has no mutating methods, and is
//!     `Send + Sync`, so one instance can back any number of representers.

use super::context::RepresentContext;
use super::data::{Data, TypeKey};
use crate::error::{RepresentError, RepresentResult};
use crate::nodes::{FlowStyle, NodeId, Tag};
use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Turns one host value into a node
///
/// Converters for containers call back into the context (see
/// [`RepresentContext::represent_sequence`] and friends) for their children.
pub trait Converter: Send + Sync {
    fn convert(&self, ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId>;
}

impl<F> Converter for F
where
    F: Fn(&mut RepresentContext<'_>, &Data) -> RepresentResult<NodeId> + Send + Sync,
{
    fn convert(&self, ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
        self(ctx, data)
    }
}

/// A named predicate over host values, used to key fallback entries
pub struct Capability {
    name: Cow<'static, str>,
    test: Box<dyn Fn(&Data) -> bool + Send + Sync>,
}

impl Capability {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        test: impl Fn(&Data) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            test: Box::new(test),
        }
    }

    /// Matches values whose runtime type is exactly `T`
    pub fn of<T: Any>() -> Self {
        Self::new(std::any::type_name::<T>(), |data| data.is::<T>())
    }

    /// Matches values whose runtime type is any of `types`
    pub fn any_of(
        name: impl Into<Cow<'static, str>>,
        types: impl IntoIterator<Item = TypeKey>,
    ) -> Self {
        let types: Vec<TypeKey> = types.into_iter().collect();
        Self::new(name, move |data| {
            data.type_key().is_some_and(|key| types.contains(&key))
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, data: &Data) -> bool {
        (self.test)(data)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

struct FallbackEntry {
    capability: Capability,
    converter: Arc<dyn Converter>,
}

/// Collects converters before the registry is frozen
#[derive(Default)]
pub struct RegistryBuilder {
    exact: HashMap<TypeKey, Arc<dyn Converter>>,
    fallback: Vec<FallbackEntry>,
    null: Option<Arc<dyn Converter>>,
}

impl RegistryBuilder {
    /// Start an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter for values whose runtime type is exactly `T`
    ///
    /// If `T` already has an exact converter, it is replaced.
    pub fn register_exact<T: Any>(
        self,
        converter: impl Fn(&mut RepresentContext<'_>, &Data) -> RepresentResult<NodeId>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.register_exact_key(TypeKey::of::<T>(), converter)
    }

    /// Register an exact converter under an explicit key
    pub fn register_exact_key(mut self, key: TypeKey, converter: impl Converter + 'static) -> Self {
        self.exact.insert(key, Arc::new(converter));
        self
    }

    /// Append a fallback converter; earlier registrations are tried first
    pub fn register_fallback(
        mut self,
        capability: Capability,
        converter: impl Fn(&mut RepresentContext<'_>, &Data) -> RepresentResult<NodeId>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.fallback.push(FallbackEntry {
            capability,
            converter: Arc::new(converter),
        });
        self
    }

    /// Install the converter used for null
    pub fn register_null(
        mut self,
        converter: impl Fn(&mut RepresentContext<'_>, &Data) -> RepresentResult<NodeId>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.null = Some(Arc::new(converter));
        self
    }

    /// Register a user-defined struct as a mapping of field name to field value
    ///
    /// `fields` lists the struct's fields in the order they should appear.
    pub fn register_record<T: Any>(
        self,
        tag: impl Into<Tag>,
        fields: fn(&T) -> Vec<(&'static str, Data)>,
    ) -> Self {
        let tag = tag.into();
        self.register_exact::<T>(move |ctx, data| {
            let record = data
                .downcast_ref::<T>()
                .ok_or_else(|| RepresentError::not_representable(data.type_name()))?;
            let entries = fields(record)
                .into_iter()
                .map(|(name, value)| (Data::from(name), value));
            ctx.represent_mapping(tag.clone(), entries, FlowStyle::Auto)
        })
    }

    /// Freeze the builder
    pub fn build(self) -> Registry {
        Registry {
            exact: self.exact,
            fallback: self.fallback,
            null: self.null,
        }
    }
}

/// Immutable converter table
pub struct Registry {
    exact: HashMap<TypeKey, Arc<dyn Converter>>,
    fallback: Vec<FallbackEntry>,
    null: Option<Arc<dyn Converter>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry preloaded with the standard converters
    pub fn with_defaults() -> Self {
        RegistryBuilder::standard().build()
    }

    /// Find the converter for a non-null value
    ///
    /// Returns `None` for null (see [`Registry::null_converter`]) and for values nothing
    /// accepts.
    pub fn lookup(&self, data: &Data) -> Option<&dyn Converter> {
        let key = data.type_key()?;
        if let Some(converter) = self.exact.get(&key) {
            tracing::trace!(type_name = key.name(), "exact converter");
            return Some(converter.as_ref());
        }
        self.fallback
            .iter()
            .find(|entry| entry.capability.matches(data))
            .map(|entry| {
                tracing::trace!(
                    type_name = key.name(),
                    capability = entry.capability.name(),
                    "fallback converter"
                );
                entry.converter.as_ref()
            })
    }

    pub fn null_converter(&self) -> Option<&dyn Converter> {
        self.null.as_deref()
    }

    pub fn has_exact<T: Any>(&self) -> bool {
        self.exact.contains_key(&TypeKey::of::<T>())
    }

    /// Names of the exactly-registered types (sorted)
    pub fn exact_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.exact.keys().map(TypeKey::name).collect();
        names.sort();
        names
    }

    /// Names of the fallback capabilities, in priority order
    pub fn fallback_names(&self) -> Vec<&str> {
        self.fallback
            .iter()
            .map(|entry| entry.capability.name())
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("exact", &self.exact_types())
            .field("fallback", &self.fallback_names())
            .field("null", &self.null.is_some())
            .finish()
    }
}
