//! WASM bindings for tabletree-core.
//!
//! Exposes `render` and `find` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript. Both take a JSON document, build the
//! table tree from it, and return table-literal text.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p tabletree-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/tabletree_wasm.wasm
//! ```

use tabletree_core::TreeError;
use wasm_bindgen::prelude::*;

fn to_js_err(err: TreeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Render a JSON document as a table literal at the given indent level.
///
/// Throws a JS error if the input is not valid JSON or holds a float.
#[wasm_bindgen]
pub fn render(json: &str, indent: usize) -> std::result::Result<String, JsValue> {
    let tree = tabletree_core::from_json(json).map_err(to_js_err)?;
    Ok(tabletree_core::render(&tree, indent))
}

/// Render the first descendant whose key equals `key`.
///
/// Throws a JS error if the input is invalid or the key is absent.
#[wasm_bindgen]
pub fn find(json: &str, key: &str) -> std::result::Result<String, JsValue> {
    let tree = tabletree_core::from_json(json).map_err(to_js_err)?;
    tree.find_child(key, true)
        .map(|node| tabletree_core::render(node, 0))
        .ok_or_else(|| to_js_err(TreeError::KeyNotFound(key.to_string())))
}
