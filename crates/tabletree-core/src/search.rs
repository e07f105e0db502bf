//! Keyed descendant search.
//!
//! The lookup checks every immediate child first, then descends into each
//! child's subtree in child order and returns the first hit. The search root's
//! own key is never compared. Keys are matched with exact, case-sensitive
//! string equality; with duplicate keys the first one reached wins.

use crate::node::Node;
use crate::types::Payload;

impl Node {
    /// Find the first descendant whose key equals `key`.
    ///
    /// `recursive` is accepted for callers that distinguish the two lookup
    /// modes, but it does not restrict the walk: descendants at any depth
    /// are always searched.
    pub fn find_child(&self, key: &str, recursive: bool) -> Option<&Node> {
        let children = match self.payload() {
            Payload::Children(children) => children,
            _ => return None,
        };
        if let Some(hit) = children.iter().find(|c| c.key() == key) {
            return Some(hit);
        }
        let found = children.iter().find_map(|c| c.find_child(key, recursive));
        if found.is_none() {
            tracing::trace!(parent = self.key(), key, "no descendant with key");
        }
        found
    }

    /// Mutable counterpart of [`Node::find_child`], same visiting order.
    pub fn find_child_mut(&mut self, key: &str, recursive: bool) -> Option<&mut Node> {
        let position = self.children().iter().position(|c| c.key() == key);
        let children = self.children_mut();
        if let Some(i) = position {
            return Some(&mut children[i]);
        }
        children
            .iter_mut()
            .find_map(|c| c.find_child_mut(key, recursive))
    }
}
