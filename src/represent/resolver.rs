//! Style resolution for collections
//!
//!     A collection's final style is decided once all of its children are finished nodes:
//!
//!         1. candidate: flow if every child (every key and every value, for mappings) is a
//!            plain scalar, block otherwise. Any collection child forces block, whatever
//!            style that child resolved to. An empty collection is flow.
//!         2. an explicit per-call request other than `Auto` wins outright
//!         3. otherwise a global default other than `Auto` is used
//!         4. otherwise the candidate
//!
//!     Precedence is explicit > global default > computed.

use crate::nodes::{FlowStyle, Node};

/// Candidate style from a collection's finished children
pub fn candidate<'n>(children: impl IntoIterator<Item = &'n Node>) -> FlowStyle {
    if children.into_iter().all(Node::is_plain_scalar) {
        FlowStyle::Flow
    } else {
        FlowStyle::Block
    }
}

/// Apply the precedence rules
pub fn resolve(explicit: FlowStyle, default: FlowStyle, candidate: FlowStyle) -> FlowStyle {
    if !explicit.is_auto() {
        explicit
    } else if !default.is_auto() {
        default
    } else {
        candidate
    }
}
