use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// The outcome of an RPC call: exactly one of a success payload or an
/// error payload.
///
/// The RPC layer reports application failures through this value rather
/// than by failing its future. Only [`crate::unwrap_response`] turns the
/// `Error` side into a rejection.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RpcResponse<D, E> {
    Data(D),
    Error(E),
}

impl<D, E> RpcResponse<D, E> {
    #[inline]
    pub fn is_data(&self) -> bool {
        matches!(self, RpcResponse::Data(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, RpcResponse::Error(_))
    }

    pub fn into_result(self) -> Result<D, E> {
        match self {
            RpcResponse::Data(data) => Ok(data),
            RpcResponse::Error(error) => Err(error),
        }
    }
}

impl<D, E> From<Result<D, E>> for RpcResponse<D, E> {
    fn from(result: Result<D, E>) -> Self {
        match result {
            Ok(data) => RpcResponse::Data(data),
            Err(error) => RpcResponse::Error(error),
        }
    }
}

/// The `{ "data": .., "error": .. }` shape as it appears on the wire.
///
/// Use `RpcResponse::try_from(parts)` to read it. A set `error` slot wins over
/// `data`; a response with neither slot set is malformed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RpcResponseParts<D, E> {
    pub data: Option<D>,
    pub error: Option<E>,
}

impl<D, E> From<RpcResponse<D, E>> for RpcResponseParts<D, E> {
    fn from(response: RpcResponse<D, E>) -> Self {
        match response {
            RpcResponse::Data(data) => RpcResponseParts {
                data: Some(data),
                error: None,
            },
            RpcResponse::Error(error) => RpcResponseParts {
                data: None,
                error: Some(error),
            },
        }
    }
}

impl<D, E> TryFrom<RpcResponseParts<D, E>> for RpcResponse<D, E> {
    type Error = MalformedResponse;

    fn try_from(parts: RpcResponseParts<D, E>) -> Result<Self, MalformedResponse> {
        match (parts.data, parts.error) {
            (_, Some(error)) => Ok(RpcResponse::Error(error)),
            (Some(data), None) => Ok(RpcResponse::Data(data)),
            (None, None) => Err(MalformedResponse::NeitherSet),
        }
    }
}

/// A wire response that carries no result at all.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum MalformedResponse {
    #[error("malformed RPC response: neither `data` nor `error` is set")]
    NeitherSet,
}

// A response that breaks the contract never produced a usable result, so it
// travels on the same channel as other transport failures.
impl From<MalformedResponse> for io::Error {
    fn from(e: MalformedResponse) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parts_with_only_error_become_error() {
        let parts: RpcResponseParts<serde_json::Value, serde_json::Value> =
            serde_json::from_value(json!({ "data": null, "error": { "oops": "bad" } })).unwrap();

        let response = RpcResponse::try_from(parts).unwrap();
        assert_eq!(response, RpcResponse::Error(json!({ "oops": "bad" })));
    }

    #[test]
    fn parts_with_missing_slots_are_malformed() {
        let parts: RpcResponseParts<u32, String> = serde_json::from_value(json!({})).unwrap();

        assert_eq!(
            RpcResponse::try_from(parts),
            Err(MalformedResponse::NeitherSet)
        );
    }

    #[test]
    fn parts_with_both_slots_keep_the_error() {
        let parts = RpcResponseParts {
            data: Some(1u32),
            error: Some("nope".to_string()),
        };

        assert_eq!(
            RpcResponse::try_from(parts),
            Ok(RpcResponse::Error("nope".to_string()))
        );
    }

    #[test]
    fn malformed_response_maps_to_invalid_data() {
        let err: io::Error = MalformedResponse::NeitherSet.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("neither"));
    }
}
