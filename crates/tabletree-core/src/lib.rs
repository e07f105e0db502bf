//! # tabletree-core
//!
//! In-memory document tree for script **table literals**, with keyed
//! descendant search and a canonical text renderer.
//!
//! A tree is made of [`Node`]s. Each node has a non-empty key (a name, or a
//! positional index rendered as a decimal string) and exactly one payload:
//! a scalar (`null`, boolean, integer, text), an ordered list of children,
//! or nothing yet.
//!
//! ## Quick start
//!
//! ```rust
//! use tabletree_core::{render, Node};
//!
//! let mut root = Node::new_root(0usize);
//! root.push_named("name", "hero").unwrap();
//! root.push_value(42).unwrap();
//!
//! let mut nested = Node::new_child_of(&root);
//! nested.push_value(true).unwrap();
//! root.push_child(nested).unwrap();
//!
//! assert_eq!(
//!     render(&root, 0),
//!     "{\n    name = \"hero\",\n    42,\n    {\n        true,\n    },\n}\n"
//! );
//! assert_eq!(root.find_child("0", true).map(|n| n.key()), Some("0"));
//! ```
//!
//! ## Modules
//!
//! - [`node`] — `Node` construction, key derivation, payload mutation
//! - [`search`] — pre-order keyed lookup (`find_child`)
//! - [`render`] — tree → table-literal text
//! - [`json`] — JSON ↔ tree bridge
//! - [`error`] — Error types for mutation and conversion failures
//! - [`types`] — `ScalarValue`, `Payload`, `NameOrIndex`

pub mod error;
pub mod json;
pub mod node;
pub mod render;
pub mod search;
pub mod types;

pub use error::TreeError;
pub use json::{from_json, from_value, render_json, to_json_pretty, to_value};
pub use node::{Node, TreeStats};
pub use render::render;
pub use types::{NameOrIndex, Payload, ScalarValue, DEFAULT_KEY};
