use rpc_query_adapter::{
    AdapterConfigError, QueryKey, QuerySettings, RpcRejection, RpcResponse, query_options,
};
use serde_json::{Value, json};
use std::io;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

#[tokio::test]
async fn test_zero_arg_query_resolves_to_data() {
    let options = query_options(
        || async {
            Ok(RpcResponse::<Value, Value>::Data(
                json!({ "message": "Hello World" }),
            ))
        },
        QuerySettings::new("resource").with_refetch_interval_ms(1000),
    )
    .unwrap();

    assert_eq!(options.query_key(), &QueryKey::from("resource"));
    assert_eq!(options.settings().refetch_interval(), Some(Duration::from_secs(1)));

    let data = options.fetch().await.unwrap();
    assert_eq!(data, json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_query_error_payload_rejects() {
    let options = query_options(
        || async { Ok(RpcResponse::<Value, Value>::Error(json!({ "oops": "bad" }))) },
        QuerySettings::new(["resource", "broken"]),
    )
    .unwrap();

    let rejection = options.fetch().await.unwrap_err();
    assert_eq!(rejection.remote(), Some(&json!({ "oops": "bad" })));
}

#[tokio::test]
async fn test_query_transport_failure_passes_through() {
    let options = query_options(
        || async {
            Err::<RpcResponse<Value, Value>, _>(io::Error::new(
                io::ErrorKind::TimedOut,
                "timed out",
            ))
        },
        QuerySettings::new("resource"),
    )
    .unwrap();

    match options.fetch().await {
        Err(RpcRejection::Transport(err)) => assert_eq!(err.kind(), io::ErrorKind::TimedOut),
        other => panic!("Expected a transport rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_each_fetch_reexecutes_call() {
    let calls = Arc::new(AtomicUsize::new(0));

    let options = query_options(
        {
            let calls = calls.clone();
            move || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Ok(RpcResponse::<usize, Value>::Data(n)) }
            }
        },
        QuerySettings::new("counter"),
    )
    .unwrap();

    // Nothing runs until the caching layer invokes the fetch function.
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(options.fetch().await.unwrap(), 1);
    assert_eq!(options.fetch().await.unwrap(), 2);
    assert_eq!(options.clone().fetch().await.unwrap(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_building_twice_behaves_identically() {
    let call = || async { Ok(RpcResponse::<Value, Value>::Data(json!({ "n": 1 }))) };
    let settings = QuerySettings::new("same").with_stale_time_ms(500);

    let first = query_options(call, settings.clone()).unwrap();
    let second = query_options(call, settings).unwrap();

    assert_eq!(first.settings(), second.settings());
    assert_eq!(first.fetch().await.unwrap(), second.fetch().await.unwrap());
}

#[test]
fn test_settings_pass_through_unchanged() {
    let settings = QuerySettings::new(QueryKey::from("resource").with(42))
        .with_enabled(false)
        .with_refetch_interval_ms(1000)
        .with_stale_time_ms(30_000)
        .with_gc_time_ms(60_000)
        .with_retry(3)
        .with_extra("refetchOnWindowFocus", false)
        .with_extra("meta", json!({ "owner": "billing" }));

    let options = query_options(
        || async { Ok(RpcResponse::<Value, Value>::Data(Value::Null)) },
        settings.clone(),
    )
    .unwrap();

    assert_eq!(options.settings(), &settings);
    assert_eq!(options.query_key().len(), 2);
    assert_eq!(options.query_key().parts(), &[json!("resource"), json!(42)]);

    let (returned, _query_fn) = options.into_parts();
    assert_eq!(returned, settings);
}

#[test]
fn test_settings_load_from_json_config() {
    let settings: QuerySettings = serde_json::from_value(json!({
        "query_key": ["resource", 7],
        "refetch_interval_ms": 250,
        "placeholder": "loading"
    }))
    .unwrap();

    assert!(settings.enabled);
    assert_eq!(settings.query_key.parts(), &[json!("resource"), json!(7)]);
    assert_eq!(settings.refetch_interval_ms, Some(250));
    assert_eq!(settings.extra.get("placeholder"), Some(&json!("loading")));

    let options = query_options(
        || async { Ok(RpcResponse::<Value, Value>::Data(Value::Null)) },
        settings.clone(),
    )
    .unwrap();
    assert_eq!(options.settings(), &settings);
}

#[test]
fn test_reserved_query_fn_is_refused() {
    for key in ["queryFn", "query_fn"] {
        let result = query_options(
            || async { Ok(RpcResponse::<Value, Value>::Data(Value::Null)) },
            QuerySettings::new("resource").with_extra(key, "mine"),
        );

        assert_eq!(
            result.unwrap_err(),
            AdapterConfigError::ReservedOption {
                key: key.to_string()
            }
        );
    }
}

#[test]
fn test_empty_query_key_is_refused() {
    let result = query_options(
        || async { Ok(RpcResponse::<Value, Value>::Data(Value::Null)) },
        QuerySettings::new(QueryKey::default()),
    );

    assert_eq!(result.unwrap_err(), AdapterConfigError::EmptyQueryKey);
}
