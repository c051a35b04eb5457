//! Identity tracker
//!
//!     Remembers which node was produced for which host value during one `represent` call.
//!     Keys are value identities (addresses), never value equality: two equal strings built
//!     separately are two entries.
//!
//!     Collection builders `put` their node *before* converting children. When a child turns
//!     out to be the collection itself (or an ancestor), the lookup hits and the walk stops
//!     instead of recursing forever.
//!
//!     The tracker holds a clone of every handle it records. As long as the tracker lives the
//!     values cannot be dropped, so their addresses cannot be recycled for new values
//!     mid-call.

use super::data::{Data, Identity};
use crate::nodes::NodeId;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct IdentityTracker {
    seen: HashMap<Identity, (Data, NodeId)>,
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node already produced for `data`, if any. Null is never tracked.
    pub fn get(&self, data: &Data) -> Option<NodeId> {
        let identity = data.identity()?;
        self.seen.get(&identity).map(|&(_, id)| id)
    }

    /// Record the node for `data`; a second `put` for the same value replaces the first
    pub fn put(&mut self, data: &Data, node: NodeId) {
        if let Some(identity) = data.identity() {
            self.seen.insert(identity, (data.clone(), node));
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
