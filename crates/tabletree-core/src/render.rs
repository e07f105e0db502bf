//! Canonical text renderer — turns a [`Node`] subtree into a table literal.
//!
//! Output rules:
//!
//! - **Indentation**: four spaces per level, in front of every line that starts a node
//! - **Key prefix**: `key = ` for named keys; positional keys are left implicit
//! - **Scalars**: `true`/`false`, plain decimal integers, double-quoted text
//!   (emitted verbatim, no escaping), `null` for null and unassigned nodes
//! - **Blocks**: `{`, one child per line each followed by `,`, then `}` at the
//!   block's own indentation; the last element keeps its trailing comma
//!
//! # Example
//! ```
//! use tabletree_core::{render, Node};
//!
//! let mut root = Node::new_root(0usize);
//! root.push_named("name", "hero").unwrap();
//! root.push_value(42).unwrap();
//! assert_eq!(render(&root, 0), "{\n    name = \"hero\",\n    42,\n}\n");
//! ```

use crate::node::Node;
use crate::types::{Payload, ScalarValue};

/// Render `node` and its subtree, starting at `indent_level`.
///
/// The result always ends with a newline. Rendering is a pure function of
/// the tree, so identical trees produce identical text.
pub fn render(node: &Node, indent_level: usize) -> String {
    let mut out = String::new();
    write_node(node, indent_level, &mut out);
    out.push('\n');
    out
}

/// Emit one node without a trailing newline; the caller decides what
/// follows (`,\n` inside a block, `\n` at the top).
fn write_node(node: &Node, depth: usize, out: &mut String) {
    out.push_str(&make_indent(depth));
    if shows_key_prefix(node.key()) {
        out.push_str(node.key());
        out.push_str(" = ");
    }
    match node.payload() {
        Payload::Scalar(value) => write_scalar(value, out),
        Payload::Empty => out.push_str("null"),
        Payload::Children(children) => write_block(children, depth, out),
    }
}

/// `{`, each child on its own line followed by `,`, closing `}` at `depth`.
fn write_block(children: &[Node], depth: usize, out: &mut String) {
    out.push_str("{\n");
    for child in children {
        write_node(child, depth + 1, out);
        out.push_str(",\n");
    }
    out.push_str(&make_indent(depth));
    out.push('}');
}

fn write_scalar(value: &ScalarValue, out: &mut String) {
    match value {
        ScalarValue::Null => out.push_str("null"),
        ScalarValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        ScalarValue::Integer(i) => out.push_str(&i.to_string()),
        ScalarValue::Text(s) => {
            // Embedded quotes pass through unescaped.
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
    }
}

/// Whether `key = ` is written before the value.
///
/// Evaluates `(non-empty && first < '0') || first > '9'` with exactly that
/// grouping. Only the first character matters: `"7up"` stays implicit while
/// `"-1"` gets a prefix.
fn shows_key_prefix(key: &str) -> bool {
    let first = key.chars().next();
    (first.is_some() && first < Some('0')) || first > Some('9')
}

/// Generate a 4-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "    ".repeat(depth)
}
