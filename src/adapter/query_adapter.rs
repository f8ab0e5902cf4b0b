use crate::call::RpcCallFn;
use crate::constants::RESERVED_QUERY_KEYS;
use crate::error::AdapterConfigError;
use crate::options::{QueryFn, QueryOptions, QuerySettings, find_reserved_key};
use crate::response::RpcResponse;
use std::future::Future;
use std::io;
use std::sync::Arc;

/// Builds a query descriptor around a zero-argument RPC call.
///
/// The returned descriptor's fetch function calls `call()` and unwraps the
/// discriminated result each time the caching layer invokes it. `settings`
/// are carried over unchanged.
///
/// If the RPC needs parameters, bind them into the closure before passing it
/// in.
///
/// Fails fast if the query key is empty or `settings.extra` tries to supply
/// the fetch function slot.
pub fn query_options<D, E, F, Fut>(
    call: F,
    settings: QuerySettings,
) -> Result<QueryOptions<D, E>, AdapterConfigError>
where
    D: Send + 'static,
    E: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
{
    if settings.query_key.is_empty() {
        tracing::warn!("Refusing to build query options without a query key");
        return Err(AdapterConfigError::EmptyQueryKey);
    }

    if let Some(key) = find_reserved_key(&settings.extra, RESERVED_QUERY_KEYS) {
        tracing::warn!("Refusing to build query options: `{}` is adapter-owned", key);
        return Err(AdapterConfigError::ReservedOption {
            key: key.to_string(),
        });
    }

    let call = RpcCallFn::<(), D, E>::no_args(call);
    let query_fn: QueryFn<D, E> = Arc::new(move || call.invoke(()));

    tracing::debug!("Built query options for key {:?}", settings.query_key);

    Ok(QueryOptions::new(settings, query_fn))
}
