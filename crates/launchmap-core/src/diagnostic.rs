//! Per-request diagnostics.
//!
//! Resolution passes never log non-fatal anomalies on their own. They push
//! entries into a [`Diagnostics`] value owned by the request, and the caller
//! decides where to surface them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-fatal anomaly observed during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A later rule reused an existing source and was discarded.
    DuplicateRemap {
        /// Process unit the rules belong to.
        unit: String,
        /// The shared source name.
        from: String,
        /// Target of the rule that was kept.
        kept: String,
        /// Target of the rule that was discarded.
        discarded: String,
    },
    /// A capability token matched no rule in any process unit.
    UnmatchedCapabilityToken {
        /// Capability the token belongs to.
        capability: String,
        /// The token that found no match.
        token: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRemap {
                unit,
                from,
                kept,
                discarded,
            } => write!(
                f,
                "unit '{unit}': remap rule for '{from}' already exists (-> '{kept}'); ignoring '{from}' -> '{discarded}'"
            ),
            Self::UnmatchedCapabilityToken { capability, token } => write!(
                f,
                "capability '{capability}': no remap rule matches '{token}'; functionality may be degraded"
            ),
        }
    }
}

/// Ordered collection of diagnostics for one launch request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Iterate diagnostics in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Emit every diagnostic as a `warn` event.
    pub fn report(&self) {
        for diagnostic in &self.0 {
            tracing::warn!(%diagnostic, "launch resolution diagnostic");
        }
    }

    /// Consume the collector, returning the entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
