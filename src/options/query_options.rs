use super::{QueryKey, QuerySettings};
use crate::call::RpcOutcome;
use std::fmt;
use std::sync::Arc;

/// The adapter-owned fetch function of a query descriptor.
pub type QueryFn<D, E> = Arc<dyn Fn() -> RpcOutcome<D, E> + Send + Sync>;

/// A query descriptor, ready for the caching layer.
///
/// Holds the caller's settings exactly as supplied plus the normalized
/// zero-argument fetch function. Cloning shares the fetch function.
pub struct QueryOptions<D, E> {
    settings: QuerySettings,
    query_fn: QueryFn<D, E>,
}

impl<D, E> QueryOptions<D, E> {
    pub(crate) fn new(settings: QuerySettings, query_fn: QueryFn<D, E>) -> Self {
        Self { settings, query_fn }
    }

    pub fn query_key(&self) -> &QueryKey {
        &self.settings.query_key
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    pub fn query_fn(&self) -> &QueryFn<D, E> {
        &self.query_fn
    }

    /// Runs the fetch function once, as the caching layer would on a load,
    /// a manual refetch, or an interval tick.
    pub fn fetch(&self) -> RpcOutcome<D, E> {
        (self.query_fn)()
    }

    pub fn into_parts(self) -> (QuerySettings, QueryFn<D, E>) {
        (self.settings, self.query_fn)
    }
}

impl<D, E> Clone for QueryOptions<D, E> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            query_fn: Arc::clone(&self.query_fn),
        }
    }
}

impl<D, E> fmt::Debug for QueryOptions<D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
