//! The table tree node: construction, key derivation and payload mutation.
//!
//! A [`Node`] is the tree, the cursor and the renderer's input all at once.
//! Nodes own their children outright and never point back at their parent;
//! the only parent interaction is [`Node::new_child_of`], which reads the
//! parent's current child count to derive a positional key.
//!
//! Building a child is a two-step protocol: derive the node (named or
//! positional), then attach it with [`Node::push_child`]. A derived node is
//! free-standing until it is attached, so callers can decide late where it
//! goes.
//!
//! ```
//! use tabletree_core::Node;
//!
//! let mut root = Node::new_root(None::<&str>);
//! let mut first = Node::new_child_of(&root);
//! first.set_value(42).unwrap();
//! root.push_child(first).unwrap();
//! assert_eq!(root.children()[0].key(), "0");
//! ```

use crate::error::{Result, TreeError};
use crate::types::{NameOrIndex, Payload, ScalarValue};
use serde::Serialize;

/// One entry of a table tree: a non-empty key plus a [`Payload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: String,
    payload: Payload,
}

impl Node {
    /// Build a detached node with an explicit key and `Empty` payload.
    ///
    /// Indices become their decimal string; an empty or absent name becomes
    /// `"0"`.
    pub fn new_root(key: impl Into<NameOrIndex>) -> Self {
        Self {
            key: key.into().into_key(),
            payload: Payload::Empty,
        }
    }

    /// Build a detached node keyed by `parent`'s current child count.
    ///
    /// The node is not attached. A parent holding a scalar (or nothing)
    /// counts as having no children, so the derived key is `"0"`.
    pub fn new_child_of(parent: &Node) -> Self {
        Self::new_root(parent.child_count())
    }

    /// Build a detached leaf in one step.
    pub fn with_value(key: impl Into<NameOrIndex>, value: impl Into<ScalarValue>) -> Self {
        Self {
            key: key.into().into_key(),
            payload: Payload::Scalar(value.into()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The scalar value, if this node is a leaf.
    pub fn value(&self) -> Option<&ScalarValue> {
        match &self.payload {
            Payload::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Immediate children in insertion order. Empty for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.payload {
            Payload::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match &mut self.payload {
            Payload::Children(children) => children,
            _ => &mut [],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// True while nothing has been assigned to this node.
    pub fn is_empty(&self) -> bool {
        matches!(self.payload, Payload::Empty)
    }

    /// Assign a scalar value, replacing any previous scalar.
    ///
    /// Fails with [`TreeError::PayloadConflict`] if the node already has
    /// children.
    pub fn set_value(&mut self, value: impl Into<ScalarValue>) -> Result<()> {
        if let Payload::Children(_) = self.payload {
            return Err(self.conflict("set a value"));
        }
        self.payload = Payload::Scalar(value.into());
        Ok(())
    }

    /// Append `child` and return it for further building.
    ///
    /// An `Empty` node becomes a `Children` node. Fails with
    /// [`TreeError::PayloadConflict`] if the node holds a scalar. Sibling
    /// keys are not checked for uniqueness.
    pub fn push_child(&mut self, child: Node) -> Result<&mut Node> {
        if let Payload::Scalar(_) = self.payload {
            return Err(self.conflict("append a child"));
        }
        if self.is_empty() {
            self.payload = Payload::Children(Vec::with_capacity(1));
        }
        match &mut self.payload {
            Payload::Children(children) => {
                children.push(child);
                let last = children.len() - 1;
                Ok(&mut children[last])
            }
            _ => unreachable!("payload is Children at this point"),
        }
    }

    /// Derive a positional child, assign `value` to it, and attach it.
    pub fn push_value(&mut self, value: impl Into<ScalarValue>) -> Result<&mut Node> {
        let mut child = Node::new_child_of(self);
        child.set_value(value)?;
        self.push_child(child)
    }

    /// Attach a named leaf.
    pub fn push_named(
        &mut self,
        key: impl Into<NameOrIndex>,
        value: impl Into<ScalarValue>,
    ) -> Result<&mut Node> {
        self.push_child(Node::with_value(key, value))
    }

    /// Node count, leaf count and depth of the subtree rooted here.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        collect_stats(self, 1, &mut stats);
        stats
    }

    fn conflict(&self, attempted: &'static str) -> TreeError {
        tracing::debug!(key = %self.key, attempted, current = self.payload.kind(), "payload conflict");
        TreeError::PayloadConflict {
            key: self.key.clone(),
            attempted,
            current: self.payload.kind(),
        }
    }
}

impl std::fmt::Display for Node {
    /// Renders the subtree at indent level 0.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::render(self, 0))
    }
}

/// Shape summary of a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Every node, including the root.
    pub nodes: usize,
    /// Nodes holding a scalar or nothing.
    pub leaves: usize,
    /// Levels from the root to the deepest node (a lone root is 1).
    pub depth: usize,
}

fn collect_stats(node: &Node, level: usize, stats: &mut TreeStats) {
    stats.nodes += 1;
    stats.depth = stats.depth.max(level);
    match &node.payload {
        Payload::Children(children) => {
            for child in children {
                collect_stats(child, level + 1, stats);
            }
        }
        _ => stats.leaves += 1,
    }
}
