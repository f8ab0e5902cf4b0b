use super::QueryKey;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// Caller-supplied query configuration, passed through to the produced
/// descriptor unchanged.
///
/// Fields the adapter has no opinion on go in `extra`; they are flattened
/// when (de)serialized so arbitrary caching-layer settings survive a trip
/// through a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    pub query_key: QueryKey,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refetch_interval_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_time_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gc_time_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_enabled() -> bool {
    true
}

impl QuerySettings {
    pub fn new(query_key: impl Into<QueryKey>) -> Self {
        Self {
            query_key: query_key.into(),
            enabled: true,
            refetch_interval_ms: None,
            stale_time_ms: None,
            gc_time_ms: None,
            retry: None,
            extra: Map::new(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_refetch_interval_ms(mut self, interval_ms: u64) -> Self {
        self.refetch_interval_ms = Some(interval_ms);
        self
    }

    pub fn with_stale_time_ms(mut self, stale_time_ms: u64) -> Self {
        self.stale_time_ms = Some(stale_time_ms);
        self
    }

    pub fn with_gc_time_ms(mut self, gc_time_ms: u64) -> Self {
        self.gc_time_ms = Some(gc_time_ms);
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

    pub fn refetch_interval(&self) -> Option<Duration> {
        self.refetch_interval_ms.map(Duration::from_millis)
    }
}
