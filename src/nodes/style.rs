//! Rendering hints carried by nodes
//!
//!     Styles are hints for the emitter. The representer never renders anything itself, it only
//!     decides which hint each node carries. Both enums deserialize from kebab-case strings so
//!     they can be read straight out of configuration files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a scalar's text should be written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarStyle {
    #[default]
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

impl ScalarStyle {
    pub fn is_plain(self) -> bool {
        self == ScalarStyle::Plain
    }

    /// Short marker used by outlines (`'`, `"`, `|`, `>`; plain has none)
    pub fn marker(self) -> &'static str {
        match self {
            ScalarStyle::Plain => "",
            ScalarStyle::SingleQuoted => "'",
            ScalarStyle::DoubleQuoted => "\"",
            ScalarStyle::Literal => "|",
            ScalarStyle::Folded => ">",
        }
    }
}

impl fmt::Display for ScalarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarStyle::Plain => "plain",
            ScalarStyle::SingleQuoted => "single-quoted",
            ScalarStyle::DoubleQuoted => "double-quoted",
            ScalarStyle::Literal => "literal",
            ScalarStyle::Folded => "folded",
        };
        f.write_str(name)
    }
}

/// Whether a collection renders compactly (flow) or expanded (block)
///
/// `Auto` means "let the representer decide". It is only ever observed on nodes that are still
/// under construction, or as a request/default coming from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowStyle {
    Flow,
    Block,
    #[default]
    Auto,
}

impl FlowStyle {
    pub fn is_auto(self) -> bool {
        self == FlowStyle::Auto
    }
}

impl fmt::Display for FlowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowStyle::Flow => "flow",
            FlowStyle::Block => "block",
            FlowStyle::Auto => "auto",
        };
        f.write_str(name)
    }
}
