//! Representer
//!
//!     Converts host value graphs into [node trees](crate::nodes::NodeTree).
//!
//!     .
//!     ├── data.rs          # Data handles, List and Map containers
//!     ├── registry.rs      # Converter trait, Capability, Registry and its builder
//!     ├── standard.rs      # Standard converters
//!     ├── tracker.rs       # Identity tracker
//!     ├── resolver.rs      # Collection style resolution
//!     ├── settings.rs      # Default scalar and flow styles
//!     ├── context.rs       # Per-call state, node builders for converters
//!     └── representer.rs   # Public entry point
//!
//!     The registry is built once and shared. Everything that changes during a call lives in
//!     the per-call context, so two calls never see each other's state.

pub mod context;
pub mod data;
pub mod registry;
pub mod representer;
pub mod resolver;
pub mod settings;
pub mod standard;
pub mod tracker;

pub use context::RepresentContext;
pub use data::{Data, Identity, List, Map, TypeKey};
pub use registry::{Capability, Converter, Registry, RegistryBuilder};
pub use representer::Representer;
pub use settings::{Settings, SettingsBuilder};
pub use tracker::IdentityTracker;
