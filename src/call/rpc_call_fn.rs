use super::CallArity;
use crate::error::{ArgGroup, RpcRejection, VariablesError};
use crate::response::{RpcResponse, unwrap_response};
use crate::variables::VariablesLayout;
use futures::future::{self, BoxFuture, FutureExt};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use std::future::Future;
use std::io;
use std::sync::Arc;

/// The future an RPC call function returns: a discriminated result, or an
/// `io::Error` if no result could be produced at all.
pub type RpcFuture<D, E> = BoxFuture<'static, Result<RpcResponse<D, E>, io::Error>>;

/// The future a normalized (adapted) function returns.
pub type RpcOutcome<D, E> = BoxFuture<'static, Result<D, RpcRejection<E>>>;

type NoArgsCall<D, E> = Arc<dyn Fn() -> RpcFuture<D, E> + Send + Sync>;
type SingleCall<V, D, E> = Arc<dyn Fn(V) -> RpcFuture<D, E> + Send + Sync>;
type SplitCall<V, D, E> = Arc<dyn Fn(V) -> Result<RpcFuture<D, E>, VariablesError> + Send + Sync>;

/// An RPC call function, tagged with its argument shape.
///
/// The caller picks the variant explicitly when wrapping the function; the
/// adapter never guesses arity at runtime. Every variant is exposed to the
/// caching layer as a function of a single variables value `V`.
pub enum RpcCallFn<V, D, E> {
    /// Takes no arguments. `V` is ignored at invocation time (typically `()`).
    NoArgs(NoArgsCall<D, E>),

    /// Takes the variables value as its only argument.
    Single(SingleCall<V, D, E>),

    /// Takes a payload group and a secondary group, which are split out of the
    /// merged variables according to `layout`.
    PayloadWithSecondary {
        layout: VariablesLayout,
        call: SplitCall<V, D, E>,
    },
}

impl<V, D, E> RpcCallFn<V, D, E>
where
    V: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
{
    pub fn no_args<F, Fut>(call: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
    {
        RpcCallFn::NoArgs(Arc::new(move || call().boxed()))
    }

    pub fn single<F, Fut>(call: F) -> Self
    where
        F: Fn(V) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
    {
        RpcCallFn::Single(Arc::new(move |variables: V| call(variables).boxed()))
    }

    /// Wraps a two-argument call function.
    ///
    /// At invocation time the variables are serialized to JSON, split with
    /// `layout`, and each half is deserialized into the argument type the call
    /// function declares (`P` for the payload, `S` for the secondary group).
    /// Use `serde_json::Value` for either to receive the raw JSON.
    pub fn payload_with_secondary<P, S, F, Fut>(layout: VariablesLayout, call: F) -> Self
    where
        V: Serialize,
        P: DeserializeOwned + 'static,
        S: DeserializeOwned + 'static,
        F: Fn(P, S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RpcResponse<D, E>, io::Error>> + Send + 'static,
    {
        let split_layout = layout.clone();

        let split = move |variables: V| -> Result<RpcFuture<D, E>, VariablesError> {
            let merged = serde_json::to_value(&variables).map_err(VariablesError::Encode)?;
            let (payload, secondary) = split_layout.split(merged)?;

            let payload = serde_json::from_value::<P>(payload).map_err(|source| {
                VariablesError::Decode {
                    group: ArgGroup::Payload,
                    source,
                }
            })?;
            let secondary = serde_json::from_value::<S>(secondary).map_err(|source| {
                VariablesError::Decode {
                    group: ArgGroup::Secondary,
                    source,
                }
            })?;

            Ok(call(payload, secondary).boxed())
        };

        RpcCallFn::PayloadWithSecondary {
            layout,
            call: Arc::new(split),
        }
    }

    /// Calls the wrapped function with `variables` reshaped for its arity,
    /// and unwraps the discriminated result.
    ///
    /// Each invocation runs the call function from scratch.
    pub fn invoke(&self, variables: V) -> RpcOutcome<D, E> {
        tracing::trace!("Dispatching {} RPC call", self.arity());

        match self {
            RpcCallFn::NoArgs(call) => unwrap_response(call()).boxed(),
            RpcCallFn::Single(call) => unwrap_response(call(variables)).boxed(),
            RpcCallFn::PayloadWithSecondary { call, .. } => match call(variables) {
                Ok(response) => unwrap_response(response).boxed(),
                Err(err) => future::ready(Err(RpcRejection::Variables(err))).boxed(),
            },
        }
    }
}

impl<V, D, E> RpcCallFn<V, D, E> {
    pub fn arity(&self) -> CallArity {
        match self {
            RpcCallFn::NoArgs(_) => CallArity::NoArgs,
            RpcCallFn::Single(_) => CallArity::Single,
            RpcCallFn::PayloadWithSecondary { .. } => CallArity::PayloadWithSecondary,
        }
    }

    /// The split layout, for the two-argument variant.
    pub fn layout(&self) -> Option<&VariablesLayout> {
        match self {
            RpcCallFn::PayloadWithSecondary { layout, .. } => Some(layout),
            _ => None,
        }
    }
}

impl<V, D, E> Clone for RpcCallFn<V, D, E> {
    fn clone(&self) -> Self {
        match self {
            RpcCallFn::NoArgs(call) => RpcCallFn::NoArgs(Arc::clone(call)),
            RpcCallFn::Single(call) => RpcCallFn::Single(Arc::clone(call)),
            RpcCallFn::PayloadWithSecondary { layout, call } => RpcCallFn::PayloadWithSecondary {
                layout: layout.clone(),
                call: Arc::clone(call),
            },
        }
    }
}

impl<V, D, E> fmt::Debug for RpcCallFn<V, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcCallFn::PayloadWithSecondary { layout, .. } => f
                .debug_struct("RpcCallFn")
                .field("arity", &self.arity())
                .field("layout", layout)
                .finish_non_exhaustive(),
            _ => f
                .debug_struct("RpcCallFn")
                .field("arity", &self.arity())
                .finish_non_exhaustive(),
        }
    }
}
