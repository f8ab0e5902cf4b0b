use std::fmt;
use std::io;
use thiserror::Error;

/// The failure side of a normalized query or mutation function.
///
/// This is what the caching layer observes when a fetch or mutate call
/// rejects. Each variant keeps the original value it was built from.
#[derive(Debug, Error)]
pub enum RpcRejection<E> {
    /// The RPC resolved with its error slot set. The payload is exactly what
    /// the RPC layer produced (validation details, status codes, etc.).
    #[error("remote call returned an error payload: {0:?}")]
    Remote(E),

    /// The call function's own future failed before any result existed.
    #[error(transparent)]
    Transport(#[from] io::Error),

    /// The invocation-time variables could not be reshaped into the call
    /// function's argument groups.
    #[error(transparent)]
    Variables(#[from] VariablesError),
}

impl<E> RpcRejection<E> {
    /// Returns the remote error payload, if this is an application-level failure.
    pub fn remote(&self) -> Option<&E> {
        match self {
            RpcRejection::Remote(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_remote(self) -> Option<E> {
        match self {
            RpcRejection::Remote(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RpcRejection::Transport(_))
    }
}

/// Which logical argument group a variables error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArgGroup {
    Payload,
    Secondary,
}

impl fmt::Display for ArgGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgGroup::Payload => write!(f, "payload"),
            ArgGroup::Secondary => write!(f, "secondary"),
        }
    }
}

/// Failures while merging or splitting variables.
#[derive(Debug, Error)]
pub enum VariablesError {
    #[error("{what} must be a JSON object, found {found}")]
    NotAnObject {
        what: &'static str,
        found: &'static str,
    },

    #[error("field `{field}` appears in both the payload and secondary groups")]
    Collision { field: String },

    #[error("field `{field}` of the {group} group cannot be recovered by the layout")]
    Unrepresentable { group: ArgGroup, field: String },

    #[error("failed to encode variables: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode the {group} group: {source}")]
    Decode {
        group: ArgGroup,
        #[source]
        source: serde_json::Error,
    },
}

/// Misuse detected while building a descriptor or a variables layout.
///
/// These are raised at configuration time, never deferred to invocation.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AdapterConfigError {
    #[error("option `{key}` is owned by the adapter and cannot be passed through")]
    ReservedOption { key: String },

    #[error("query key must contain at least one element")]
    EmptyQueryKey,

    #[error("layout field names must not be empty")]
    EmptyFieldName,

    #[error("payload field `{field}` is listed more than once")]
    DuplicateField { field: String },

    #[error("field `{field}` is claimed by both the payload and secondary slots")]
    OverlappingSlots { field: String },
}

/// Names the JSON type of a value for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
