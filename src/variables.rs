mod payload_slot;
mod variables_layout;

pub use payload_slot::{PayloadSlot, SecondarySlot};
pub use variables_layout::VariablesLayout;
