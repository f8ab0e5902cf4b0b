use rpc_query_adapter::{RpcRejection, RpcResponse, RpcResponseParts, unwrap_response};
use serde_json::{Value, json};
use std::io;

#[tokio::test]
async fn test_data_is_returned_unchanged() {
    let data = json!({ "message": "Hello World", "nested": { "list": [1, 2, 3] } });

    let result = unwrap_response(async {
        Ok::<_, io::Error>(RpcResponse::<Value, Value>::Data(data.clone()))
    })
    .await;

    assert_eq!(result.unwrap(), data);
}

#[tokio::test]
async fn test_error_payload_becomes_rejection() {
    let error = json!({ "status": 422, "value": { "field": "name", "reason": "too short" } });

    let result = unwrap_response(async {
        Ok::<_, io::Error>(RpcResponse::<Value, Value>::Error(error.clone()))
    })
    .await;

    match result {
        Err(RpcRejection::Remote(payload)) => assert_eq!(payload, error),
        other => panic!("Expected a remote rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_passes_through() {
    let result = unwrap_response(async {
        Err::<RpcResponse<Value, Value>, _>(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    })
    .await;

    let rejection = result.unwrap_err();
    assert!(rejection.is_transport());
    assert!(rejection.remote().is_none());
    match rejection {
        RpcRejection::Transport(err) => {
            assert_eq!(err.kind(), io::ErrorKind::ConnectionRefused);
            assert_eq!(err.to_string(), "connection refused");
        }
        other => panic!("Expected a transport rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wire_response_with_error_is_rejected() {
    let wire = r#"{ "data": null, "error": { "oops": "bad" } }"#;

    let result = unwrap_response(async move {
        let parts: RpcResponseParts<Value, Value> = serde_json::from_str(wire)?;
        Ok::<_, io::Error>(RpcResponse::try_from(parts)?)
    })
    .await;

    assert_eq!(result.unwrap_err().into_remote(), Some(json!({ "oops": "bad" })));
}

#[tokio::test]
async fn test_wire_response_with_both_slots_rejects_with_error() {
    let wire = r#"{ "data": { "a": 1 }, "error": { "oops": "bad" } }"#;

    let result = unwrap_response(async move {
        let parts: RpcResponseParts<Value, Value> = serde_json::from_str(wire)?;
        Ok::<_, io::Error>(RpcResponse::try_from(parts)?)
    })
    .await;

    match result {
        Err(RpcRejection::Remote(payload)) => assert_eq!(payload, json!({ "oops": "bad" })),
        other => panic!("Expected a remote rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_wire_response_is_a_transport_failure() {
    let wire = r#"{ "data": null, "error": null }"#;

    let result = unwrap_response(async move {
        let parts: RpcResponseParts<Value, Value> = serde_json::from_str(wire)?;
        Ok::<_, io::Error>(RpcResponse::try_from(parts)?)
    })
    .await;

    match result {
        Err(RpcRejection::Transport(err)) => assert_eq!(err.kind(), io::ErrorKind::InvalidData),
        other => panic!("Expected a transport rejection, got {:?}", other),
    }
}

#[test]
fn test_response_result_conversions() {
    let ok: RpcResponse<u32, String> = Ok(7).into();
    assert!(ok.is_data());
    assert_eq!(ok.into_result(), Ok(7));

    let err: RpcResponse<u32, String> = Err("nope".to_string()).into();
    assert!(err.is_error());

    let parts = RpcResponseParts::from(err);
    assert_eq!(parts.data, None);
    assert_eq!(parts.error.as_deref(), Some("nope"));
}
