//! Capability requirements declared by an application.

use serde::{Deserialize, Serialize};

/// A rewrite demanded by a capability provider.
///
/// Any remap rule whose source matches `token` gets its target replaced by
/// `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRemap {
    /// Fragment identifying the rules to rewrite.
    pub token: String,
    /// Name the provider serves the endpoint under.
    pub target: String,
}

/// A capability the application depends on, with the provider's rewrites.
///
/// `remappings` is `None` when the capability machinery supplied no
/// provider data at all, which resolution treats as a fatal precondition
/// violation. `Some(vec![])` is a provider that demands no rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRequirement {
    /// Capability name (e.g. `std_capabilities/DifferentialMobileBase`).
    pub name: String,
    /// Provider rewrites, if provider data is available.
    #[serde(default)]
    pub remappings: Option<Vec<CapabilityRemap>>,
}

impl CapabilityRequirement {
    /// Create a requirement with no provider data attached yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remappings: None,
        }
    }

    /// Attach a provider rewrite, marking provider data as present.
    #[must_use]
    pub fn with_remap(mut self, token: impl Into<String>, target: impl Into<String>) -> Self {
        self.remappings
            .get_or_insert_with(Vec::new)
            .push(CapabilityRemap {
                token: token.into(),
                target: target.into(),
            });
        self
    }

    /// Mark provider data as present even if it demands no rewrites.
    #[must_use]
    pub fn provided(mut self) -> Self {
        self.remappings.get_or_insert_with(Vec::new);
        self
    }
}
