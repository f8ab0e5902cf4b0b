use super::{MutationCallbacks, MutationSettings};
use crate::call::{CallArity, RpcOutcome};
use std::fmt;
use std::sync::Arc;

/// The adapter-owned mutate function of a mutation descriptor.
pub type MutationFn<V, D, E> = Arc<dyn Fn(V) -> RpcOutcome<D, E> + Send + Sync>;

/// A mutation descriptor, ready for the caching layer.
///
/// Variables are supplied when the mutation is invoked, not here.
pub struct MutationOptions<V, D, E> {
    settings: MutationSettings,
    callbacks: MutationCallbacks<V, D, E>,
    arity: CallArity,
    mutation_fn: MutationFn<V, D, E>,
}

impl<V, D, E> MutationOptions<V, D, E> {
    pub(crate) fn new(
        settings: MutationSettings,
        callbacks: MutationCallbacks<V, D, E>,
        arity: CallArity,
        mutation_fn: MutationFn<V, D, E>,
    ) -> Self {
        Self {
            settings,
            callbacks,
            arity,
            mutation_fn,
        }
    }

    pub fn settings(&self) -> &MutationSettings {
        &self.settings
    }

    pub fn callbacks(&self) -> &MutationCallbacks<V, D, E> {
        &self.callbacks
    }

    /// Argument shape of the wrapped call function.
    pub fn arity(&self) -> CallArity {
        self.arity
    }

    pub fn mutation_fn(&self) -> &MutationFn<V, D, E> {
        &self.mutation_fn
    }

    /// Runs only the mutate function. Lifecycle callbacks are left to the
    /// caching layer.
    pub fn mutate(&self, variables: V) -> RpcOutcome<D, E> {
        (self.mutation_fn)(variables)
    }

    pub fn into_parts(
        self,
    ) -> (
        MutationSettings,
        MutationCallbacks<V, D, E>,
        MutationFn<V, D, E>,
    ) {
        (self.settings, self.callbacks, self.mutation_fn)
    }
}

impl<V, D, E> Clone for MutationOptions<V, D, E> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            callbacks: self.callbacks.clone(),
            arity: self.arity,
            mutation_fn: Arc::clone(&self.mutation_fn),
        }
    }
}

impl<V, D, E> fmt::Debug for MutationOptions<V, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationOptions")
            .field("settings", &self.settings)
            .field("callbacks", &self.callbacks)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
