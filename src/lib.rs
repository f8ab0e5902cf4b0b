//! Adapts RPC calls that resolve to a discriminated `{ data, error }` result
//! into option descriptors a query/caching layer can consume directly.
//!
//! The caching layer expects plain async functions that fail by returning
//! `Err`, while the RPC layer reports application failures inside the
//! resolved value. This crate owns that translation (see [`unwrap_response`])
//! and normalizes call functions of zero, one, or two argument groups into a
//! single "variables" argument (see [`RpcCallFn`] and [`VariablesLayout`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use rpc_query_adapter::{QuerySettings, RpcResponse, query_options};
//! use serde_json::json;
//!
//! # async fn demo() {
//! let options = query_options(
//!     || async { Ok(RpcResponse::<_, String>::Data(json!({ "message": "Hello World" }))) },
//!     QuerySettings::new("resource").with_refetch_interval_ms(1000),
//! )
//! .unwrap();
//!
//! let data = options.fetch().await.unwrap();
//! assert_eq!(data, json!({ "message": "Hello World" }));
//! # }
//! ```

pub mod adapter;
pub mod call;
pub mod constants;
pub mod error;
pub mod options;
pub mod response;
pub mod variables;

pub use adapter::*;
pub use call::*;
pub use error::*;
pub use options::*;
pub use response::*;
pub use variables::*;
