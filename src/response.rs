mod rpc_response;
mod unwrap_response;

pub use rpc_response::{MalformedResponse, RpcResponse, RpcResponseParts};
pub use unwrap_response::unwrap_response;
