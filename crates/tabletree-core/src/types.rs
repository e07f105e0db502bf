//! Value types carried by table tree nodes.

use serde::{Deserialize, Serialize};

/// A leaf value. Mirrors the scalar subset of a script table literal:
/// there is no float variant, integers are always `i64`.
///
/// Serializes untagged, so a `ScalarValue` maps directly onto the matching
/// JSON primitive (`Null` ↔ `null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Boolean(b)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Integer(i)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        ScalarValue::Integer(i64::from(i))
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Text(s)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Null, Into::into)
    }
}

/// What a node holds. Exactly one variant at any time, so a node can never
/// carry a scalar and children together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    Scalar(ScalarValue),
    Children(Vec<crate::Node>),
    /// Freshly constructed, nothing assigned yet.
    #[default]
    Empty,
}

impl Payload {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Payload::Scalar(_) => "a scalar value",
            Payload::Children(_) => "children",
            Payload::Empty => "nothing",
        }
    }
}

/// An explicit node key: either a name or a positional index.
///
/// Absence (`None`) and the empty name both normalize to `"0"` when turned
/// into a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOrIndex {
    Name(String),
    Index(usize),
}

/// Key substituted for empty or absent candidates.
pub const DEFAULT_KEY: &str = "0";

impl NameOrIndex {
    /// The normalized key string. Never empty.
    pub fn into_key(self) -> String {
        match self {
            NameOrIndex::Name(name) if name.is_empty() => DEFAULT_KEY.to_string(),
            NameOrIndex::Name(name) => name,
            NameOrIndex::Index(i) => i.to_string(),
        }
    }
}

impl From<&str> for NameOrIndex {
    fn from(s: &str) -> Self {
        NameOrIndex::Name(s.to_string())
    }
}

impl From<String> for NameOrIndex {
    fn from(s: String) -> Self {
        NameOrIndex::Name(s)
    }
}

impl From<&String> for NameOrIndex {
    fn from(s: &String) -> Self {
        NameOrIndex::Name(s.clone())
    }
}

impl From<usize> for NameOrIndex {
    fn from(i: usize) -> Self {
        NameOrIndex::Index(i)
    }
}

impl<T: Into<NameOrIndex>> From<Option<T>> for NameOrIndex {
    fn from(v: Option<T>) -> Self {
        v.map_or(NameOrIndex::Name(String::new()), Into::into)
    }
}
