/// Field name the payload is nested under when no layout is specified.
pub const DEFAULT_PAYLOAD_FIELD: &str = "body";

/// Pass-through keys that would collide with the adapter-owned query function.
///
/// Both the camel-case name used by JavaScript-shaped configs and the
/// snake-case Rust name are refused.
pub const RESERVED_QUERY_KEYS: &[&str] = &["queryFn", "query_fn"];

/// Pass-through keys that would collide with the adapter-owned mutation function.
pub const RESERVED_MUTATION_KEYS: &[&str] = &["mutationFn", "mutation_fn"];
