mod mutation_adapter;
mod query_adapter;

pub use mutation_adapter::{
    mutation_options, mutation_options_no_args, mutation_options_single, mutation_options_split,
};
pub use query_adapter::query_options;
