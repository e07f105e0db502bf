//! JSON bridge — build a table tree from JSON, and flatten one back to JSON.
//!
//! Conversion goes through `serde_json::Value` (with `preserve_order`, so
//! object fields keep their source order):
//!
//! - objects → named children, in field order
//! - arrays → positional children keyed `"0"`, `"1"`, …
//! - `null`, booleans, strings and `i64` integers → the matching scalar
//! - any other number → [`TreeError::UnsupportedJson`]
//!
//! The root always gets the default key `"0"`, so it renders without a
//! `key = ` prefix.

use crate::error::{Result, TreeError};
use crate::node::Node;
use crate::render::render;
use crate::types::{NameOrIndex, Payload, ScalarValue};
use serde_json::{Map, Value};

/// Parse a JSON string into a table tree.
pub fn from_json(json: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Build a table tree from an already-parsed JSON value.
pub fn from_value(value: &Value) -> Result<Node> {
    let mut root = Node::new_root(None::<&str>);
    fill(&mut root, value, "")?;
    let stats = root.stats();
    tracing::debug!(nodes = stats.nodes, depth = stats.depth, "built tree from JSON");
    Ok(root)
}

/// Parse JSON and render the resulting tree at indent level 0.
pub fn render_json(json: &str) -> Result<String> {
    Ok(render(&from_json(json)?, 0))
}

/// Assign `value` to the (still empty) `node`. `path` is the dotted key path
/// used in error messages.
fn fill(node: &mut Node, value: &Value, path: &str) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child_value) in map {
                let mut child = Node::new_root(NameOrIndex::from(key));
                fill(&mut child, child_value, &join_path(path, key))?;
                node.push_child(child)?;
            }
        }
        Value::Array(arr) => {
            for item in arr {
                let mut child = Node::new_child_of(node);
                let child_path = join_path(path, child.key());
                fill(&mut child, item, &child_path)?;
                node.push_child(child)?;
            }
        }
        primitive => node.set_value(to_scalar(primitive, path)?)?,
    }
    Ok(())
}

fn to_scalar(value: &Value, path: &str) -> Result<ScalarValue> {
    match value {
        Value::Null => Ok(ScalarValue::Null),
        Value::Bool(b) => Ok(ScalarValue::Boolean(*b)),
        Value::String(s) => Ok(ScalarValue::Text(s.clone())),
        Value::Number(n) => n.as_i64().map(ScalarValue::Integer).ok_or_else(|| {
            TreeError::UnsupportedJson {
                path: display_path(path),
                kind: format!("number {} is not a 64-bit integer", n),
            }
        }),
        // Containers are handled by `fill`.
        _ => Err(TreeError::UnsupportedJson {
            path: display_path(path),
            kind: "container in scalar position".to_string(),
        }),
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

/// Flatten a table tree back into JSON.
///
/// A block whose keys are exactly `"0"`, `"1"`, … in order becomes an array;
/// any other block becomes an object. Duplicate sibling keys collapse to the
/// first occurrence. Unassigned nodes become `null`.
pub fn to_value(node: &Node) -> Value {
    match node.payload() {
        Payload::Empty => Value::Null,
        Payload::Scalar(scalar) => scalar_to_value(scalar),
        Payload::Children(children) if is_sequence(children) => {
            Value::Array(children.iter().map(to_value).collect())
        }
        Payload::Children(children) => {
            let mut map = Map::new();
            for child in children {
                if !map.contains_key(child.key()) {
                    map.insert(child.key().to_string(), to_value(child));
                }
            }
            Value::Object(map)
        }
    }
}

/// Flatten a tree to a pretty-printed JSON string.
pub fn to_json_pretty(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(node))?)
}

fn scalar_to_value(scalar: &ScalarValue) -> Value {
    match scalar {
        ScalarValue::Null => Value::Null,
        ScalarValue::Boolean(b) => Value::Bool(*b),
        ScalarValue::Integer(i) => Value::from(*i),
        ScalarValue::Text(s) => Value::String(s.clone()),
    }
}

fn is_sequence(children: &[Node]) -> bool {
    children
        .iter()
        .enumerate()
        .all(|(i, c)| c.key() == i.to_string())
}
