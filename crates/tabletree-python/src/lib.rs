//! # tabletree-python
//!
//! Python bindings for the table tree renderer and keyed search, built with
//! PyO3.
//!
//! Exposes the following functions to Python as the `tabletree` module:
//!
//! - `render(json, indent=0)` -- JSON string -> table literal
//! - `find(json, key, recursive=True)` -- table literal of the first node keyed `key`
//! - `to_json(json)` -- JSON string normalized through the tree
//! - `stats(json)` -- `(nodes, leaves, depth)` tuple

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use tabletree_core::TreeError;

fn to_py_err(err: TreeError) -> PyErr {
    match err {
        TreeError::KeyNotFound(key) => PyKeyError::new_err(key),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Render a JSON document as a table literal.
///
/// Args:
///     json: A JSON string. Numbers must be 64-bit integers.
///     indent: Indentation level of the outermost node.
///
/// Returns:
///     The rendered table literal, ending with a newline.
///
/// Raises:
///     ValueError: If the input is not valid JSON or holds a float.
#[pyfunction]
#[pyo3(signature = (json, indent=0))]
fn render(json: &str, indent: usize) -> PyResult<String> {
    let tree = tabletree_core::from_json(json).map_err(to_py_err)?;
    Ok(tabletree_core::render(&tree, indent))
}

/// Render the first descendant whose key equals `key`.
///
/// Raises:
///     ValueError: If the input is not valid JSON.
///     KeyError: If no descendant carries `key`.
#[pyfunction]
#[pyo3(signature = (json, key, recursive=true))]
fn find(json: &str, key: &str, recursive: bool) -> PyResult<String> {
    let tree = tabletree_core::from_json(json).map_err(to_py_err)?;
    tree.find_child(key, recursive)
        .map(|node| tabletree_core::render(node, 0))
        .ok_or_else(|| to_py_err(TreeError::KeyNotFound(key.to_string())))
}

/// Convert JSON to a tree and back, returning pretty-printed JSON.
#[pyfunction]
fn to_json(json: &str) -> PyResult<String> {
    let tree = tabletree_core::from_json(json).map_err(to_py_err)?;
    tabletree_core::to_json_pretty(&tree).map_err(to_py_err)
}

/// Node, leaf and depth counts of the tree built from `json`.
#[pyfunction]
fn stats(json: &str) -> PyResult<(usize, usize, usize)> {
    let tree = tabletree_core::from_json(json).map_err(to_py_err)?;
    let stats = tree.stats();
    Ok((stats.nodes, stats.leaves, stats.depth))
}

/// The `tabletree` Python module, implemented in Rust via PyO3.
#[pymodule]
fn tabletree(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render, m)?)?;
    m.add_function(wrap_pyfunction!(find, m)?)?;
    m.add_function(wrap_pyfunction!(to_json, m)?)?;
    m.add_function(wrap_pyfunction!(stats, m)?)?;
    Ok(())
}
