mod call_arity;
mod rpc_call_fn;

pub use call_arity::CallArity;
pub use rpc_call_fn::{RpcCallFn, RpcFuture, RpcOutcome};
