use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a cached query. Compared element by element, in order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryKey(Vec<Value>);

impl QueryKey {
    pub fn new(parts: Vec<Value>) -> Self {
        Self(parts)
    }

    /// Appends one element, e.g. a resource id.
    pub fn with(mut self, part: impl Into<Value>) -> Self {
        self.0.push(part.into());
        self
    }

    pub fn parts(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for QueryKey {
    fn from(part: &str) -> Self {
        Self(vec![Value::from(part)])
    }
}

impl From<String> for QueryKey {
    fn from(part: String) -> Self {
        Self(vec![Value::from(part)])
    }
}

impl From<Vec<Value>> for QueryKey {
    fn from(parts: Vec<Value>) -> Self {
        Self(parts)
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(parts: [&str; N]) -> Self {
        parts.into_iter().map(Value::from).collect()
    }
}

impl FromIterator<Value> for QueryKey {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
