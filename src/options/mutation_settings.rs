use super::QueryKey;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied mutation configuration, passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_key: Option<QueryKey>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MutationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mutation_key(mut self, mutation_key: impl Into<QueryKey>) -> Self {
        self.mutation_key = Some(mutation_key.into());
        self
    }

    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
