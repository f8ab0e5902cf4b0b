use super::RpcResponse;
use crate::error::RpcRejection;
use std::future::Future;
use std::io;

/// Awaits an RPC call and converts its discriminated result into a plain
/// `Result`.
///
/// - `Data(d)` resolves to `Ok(d)` untouched.
/// - `Error(e)` resolves to `Err(RpcRejection::Remote(e))` with `e` untouched.
/// - A failure of the call's own future (no result was produced) is passed
///   through as `RpcRejection::Transport` without being inspected.
///
/// This is the only place the success/error discrimination is translated. It
/// does not retry, log, or otherwise touch the value.
pub async fn unwrap_response<D, E, F>(response: F) -> Result<D, RpcRejection<E>>
where
    F: Future<Output = Result<RpcResponse<D, E>, io::Error>>,
{
    match response.await? {
        RpcResponse::Data(data) => Ok(data),
        RpcResponse::Error(error) => Err(RpcRejection::Remote(error)),
    }
}
