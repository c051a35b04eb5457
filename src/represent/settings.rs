//! Representer settings
//!
//! The two knobs the representer reads. Everything else a dump can be configured with (line
//! width, canonical output, indentation) belongs to the emitter.

use crate::nodes::{FlowStyle, ScalarStyle};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Settings {
    /// Style given to scalars whose converter does not ask for one
    #[serde(default)]
    pub default_scalar_style: ScalarStyle,
    /// Collection style used when a converter requests `Auto`; `Auto` here means "compute it"
    #[serde(default)]
    pub default_flow_style: FlowStyle,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn default_scalar_style(mut self, style: ScalarStyle) -> Self {
        self.settings.default_scalar_style = style;
        self
    }

    pub fn default_flow_style(mut self, style: FlowStyle) -> Self {
        self.settings.default_flow_style = style;
        self
    }

    pub fn build(self) -> Settings {
        self.settings
    }
}
