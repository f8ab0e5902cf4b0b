use crate::call::RpcCallFn;
use crate::constants::RESERVED_MUTATION_KEYS;
use crate::error::AdapterConfigError;
use crate::options::{
    MutationCallbacks, MutationFn, MutationOptions, MutationSettings, find_reserved_key,
};
use crate::response::RpcResponse;
use crate::variables::VariablesLayout;
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::io;
use std::sync::Arc;

/// Builds a mutation descriptor around a call function of any arity.
///
/// The produced mutate function takes the variables at invocation time,
/// reshapes them for `call`'s declared arity, and unwraps the result. The
/// callbacks and settings are stored untouched; none of the callbacks are
/// invoked by the adapter.
///
/// Fails fast if `settings.extra` tries to supply the mutate function slot.
pub fn mutation_options<V, D, E>(
    call: RpcCallFn<V, D, E>,
    settings: MutationSettings,
    callbacks: MutationCallbacks<V, D, E>,
) -> Result<MutationOptions<V, D, E>, AdapterConfigError>
where
    V: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
{
    if let Some(key) = find_reserved_key(&settings.extra, RESERVED_MUTATION_KEYS) {
        tracing::warn!("Refusing to build mutation options: `{}` is adapter-owned", key);
        return Err(AdapterConfigError::ReservedOption {
            key: key.to_string(),
        });
    }

    let arity = call.arity();
    let mutation_fn: MutationFn<V, D, E> = Arc::new(move |variables: V| call.invoke(variables));

    tracing::debug!(
        "Built {} mutation options (key: {:?})",
        arity,
        settings.mutation_key
    );

    Ok(MutationOptions::new(settings, callbacks, arity, mutation_fn))
}

/// [`mutation_options`] for `fn()`. Whatever variables the mutation is
/// invoked with are ignored.
pub fn mutation_options_no_args<V, D, E, F, Fut>(
    call: F,
    settings: MutationSettings,
    callbacks: MutationCallbacks<V, D, E>,
) -> Result<MutationOptions<V, D, E>, AdapterConfigError>
where
    V: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
{
    mutation_options(RpcCallFn::no_args(call), settings, callbacks)
}

/// [`mutation_options`] for `fn(variables)`.
pub fn mutation_options_single<V, D, E, F, Fut>(
    call: F,
    settings: MutationSettings,
    callbacks: MutationCallbacks<V, D, E>,
) -> Result<MutationOptions<V, D, E>, AdapterConfigError>
where
    V: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
    F: Fn(V) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
{
    mutation_options(RpcCallFn::single(call), settings, callbacks)
}

/// [`mutation_options`] for `fn(payload, secondary)`, with the merged
/// variables split according to `layout`.
pub fn mutation_options_split<V, P, S, D, E, F, Fut>(
    layout: VariablesLayout,
    call: F,
    settings: MutationSettings,
    callbacks: MutationCallbacks<V, D, E>,
) -> Result<MutationOptions<V, D, E>, AdapterConfigError>
where
    V: Serialize + Send + 'static,
    P: DeserializeOwned + 'static,
    S: DeserializeOwned + 'static,
    D: Send + 'static,
    E: Send + 'static,
    F: Fn(P, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
{
    mutation_options(
        RpcCallFn::payload_with_secondary(layout, call),
        settings,
        callbacks,
    )
}
