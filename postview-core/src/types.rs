//! Domain types shared by the render pipeline and its collaborators.
//!
//! Route data and view data are order-preserving maps (`IndexMap`); callers
//! rely on insertion order when locations and values are reported back.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-defined key/value pairs bound to a view alongside the model.
pub type ViewData = IndexMap<String, Value>;

/// Request metadata a view model may carry so links and asset paths render
/// as they would under a live request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPath {
    pub host: String,
    pub scheme: String,
    #[serde(default)]
    pub path_base: String,
}

impl RequestPath {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        RequestPath {
            host: host.into(),
            scheme: scheme.into(),
            path_base: String::new(),
        }
    }

    pub fn with_path_base(mut self, path_base: impl Into<String>) -> Self {
        self.path_base = path_base.into();
        self
    }
}

/// Ordered route-parameter name → value mapping supplied by the caller.
///
/// Values are arbitrary JSON; they are coerced to display strings when the
/// renderer copies them into a synthesized action descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteData(IndexMap<String, Value>);

impl RouteData {
    pub fn new() -> Self {
        RouteData(IndexMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Copy into a name → display-string map, preserving order.
    pub fn to_display_strings(&self) -> IndexMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), display_value(v)))
            .collect()
    }
}

impl From<IndexMap<String, Value>> for RouteData {
    fn from(values: IndexMap<String, Value>) -> Self {
        RouteData(values)
    }
}

impl FromIterator<(String, Value)> for RouteData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        RouteData(iter.into_iter().collect())
    }
}

/// Display form of a JSON value: strings unquoted, everything else as its
/// canonical JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path_base)
    }
}
