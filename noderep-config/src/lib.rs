//! Configuration loader for the noderep representer.
//!
//! The documented defaults live in `defaults/noderep.default.toml`, compiled into the crate.
//! A [`Loader`] records extra layers (files, environment, overrides) and applies them over
//! those defaults when it builds a [`NoderepConfig`].

use config::{Config, ConfigError, Environment, File, FileFormat, Map, Value};
use noderep::represent::Settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/noderep.default.toml");
const ENV_PREFIX: &str = "NODEREP";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NoderepConfig {
    /// Knobs read by the representer
    pub represent: Settings,
}

/// One layer of configuration
#[derive(Debug, Clone)]
enum Layer {
    File { path: PathBuf, required: bool },
    Environment { vars: Option<Map<String, String>> },
    Override { key: String, value: Value },
}

/// Stacks files, `NODEREP_*` variables and single-key overrides on the embedded defaults
///
/// Files and environment layers apply in the order they were added, after the defaults;
/// overrides apply last. Nothing is read until [`Loader::build`].
#[derive(Debug, Clone, Default)]
pub struct Loader {
    layers: Vec<Layer>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        })
    }

    /// A TOML file that is skipped when absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        })
    }

    /// Process environment, e.g. `NODEREP_REPRESENT__DEFAULT_FLOW_STYLE=block`
    pub fn with_environment(self) -> Self {
        self.push(Layer::Environment { vars: None })
    }

    /// Same naming as [`Loader::with_environment`], read from `vars` instead of the process
    pub fn with_environment_vars(self, vars: Map<String, String>) -> Self {
        self.push(Layer::Environment { vars: Some(vars) })
    }

    /// Dotted key, e.g. `("represent.default_scalar_style", "double-quoted")`
    pub fn set_override(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(Layer::Override {
            key: key.into(),
            value: value.into(),
        })
    }

    fn push(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn build(self) -> Result<NoderepConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        for layer in self.layers {
            builder = match layer {
                Layer::File { path, required } => builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(required),
                ),
                Layer::Environment { vars } => builder.add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator("_")
                        .separator("__")
                        .source(vars),
                ),
                Layer::Override { key, value } => builder.set_override(key, value)?,
            };
        }
        builder.build()?.try_deserialize()
    }

    /// Only the representer settings
    pub fn settings(self) -> Result<Settings, ConfigError> {
        Ok(self.build()?.represent)
    }
}

/// The embedded defaults, nothing layered on top
pub fn load_defaults() -> Result<NoderepConfig, ConfigError> {
    Loader::new().build()
}
