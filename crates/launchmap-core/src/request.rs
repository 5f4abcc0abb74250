//! Client remap requests made when starting an application instance.

use serde::{Deserialize, Serialize};

/// A rewrite requested by the client starting the instance.
///
/// `from` names a declared public interface endpoint; `to` is absolute or
/// relative to the application namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapRequest {
    /// Declared endpoint name to rewrite.
    pub from: String,
    /// Requested target name.
    pub to: String,
}

impl RemapRequest {
    /// Create a remap request.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
