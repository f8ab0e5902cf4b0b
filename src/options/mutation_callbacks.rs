use crate::error::RpcRejection;
use std::fmt;
use std::sync::Arc;

pub type OnMutate<V> = Arc<dyn Fn(&V) + Send + Sync>;
pub type OnSuccess<V, D> = Arc<dyn Fn(&D, &V) + Send + Sync>;
pub type OnError<V, E> = Arc<dyn Fn(&RpcRejection<E>, &V) + Send + Sync>;
pub type OnSettled<V, D, E> = Arc<dyn Fn(Result<&D, &RpcRejection<E>>, &V) + Send + Sync>;

/// Lifecycle hooks for a mutation.
///
/// These belong to the caching layer: the adapter stores them on the
/// descriptor and never calls them itself.
pub struct MutationCallbacks<V, D, E> {
    pub on_mutate: Option<OnMutate<V>>,
    pub on_success: Option<OnSuccess<V, D>>,
    pub on_error: Option<OnError<V, E>>,
    pub on_settled: Option<OnSettled<V, D, E>>,
}

impl<V, D, E> MutationCallbacks<V, D, E> {
    pub fn new() -> Self {
        Self {
            on_mutate: None,
            on_success: None,
            on_error: None,
            on_settled: None,
        }
    }

    pub fn on_mutate(mut self, f: impl Fn(&V) + Send + Sync + 'static) -> Self {
        self.on_mutate = Some(Arc::new(f));
        self
    }

    pub fn on_success(mut self, f: impl Fn(&D, &V) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&RpcRejection<E>, &V) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub fn on_settled(
        mut self,
        f: impl Fn(Result<&D, &RpcRejection<E>>, &V) + Send + Sync + 'static,
    ) -> Self {
        self.on_settled = Some(Arc::new(f));
        self
    }
}

impl<V, D, E> Default for MutationCallbacks<V, D, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D, E> Clone for MutationCallbacks<V, D, E> {
    fn clone(&self) -> Self {
        Self {
            on_mutate: self.on_mutate.clone(),
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
            on_settled: self.on_settled.clone(),
        }
    }
}

impl<V, D, E> fmt::Debug for MutationCallbacks<V, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationCallbacks")
            .field("on_mutate", &self.on_mutate.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_settled", &self.on_settled.is_some())
            .finish()
    }
}
