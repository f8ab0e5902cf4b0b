mod mutation_callbacks;
mod mutation_options;
mod mutation_settings;
mod query_key;
mod query_options;
mod query_settings;

pub use mutation_callbacks::{MutationCallbacks, OnError, OnMutate, OnSettled, OnSuccess};
pub use mutation_options::{MutationFn, MutationOptions};
pub use mutation_settings::MutationSettings;
pub use query_key::QueryKey;
pub use query_options::{QueryFn, QueryOptions};
pub use query_settings::QuerySettings;

use serde_json::{Map, Value};

/// Finds the first pass-through key that names an adapter-owned slot.
pub(crate) fn find_reserved_key<'a>(
    extra: &'a Map<String, Value>,
    reserved: &[&str],
) -> Option<&'a str> {
    extra
        .keys()
        .map(String::as_str)
        .find(|key| reserved.contains(key))
}
