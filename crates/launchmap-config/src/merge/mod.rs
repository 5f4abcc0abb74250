//! Deep merge of TOML values.
//!
//! The merge operates on raw [`toml::Value`] trees rather than deserialized
//! structs, so a key missing from an overlay never overrides the base layer.

mod deep;
mod path;
mod types;

pub use deep::deep_merge_tracking;
pub(crate) use deep::record_leaves;
pub(crate) use path::set_nested;
pub use types::{ConfigLayer, FieldSources};

#[cfg(test)]
mod tests;
