//! Fatal error types for remap resolution.
//!
//! Non-fatal anomalies are never errors; they are recorded as
//! [`Diagnostic`](crate::Diagnostic) entries and resolution continues.

use thiserror::Error;

/// Errors that abort resolution of a launch request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    // Precondition violations
    /// A declared capability arrived without any provider data.
    ///
    /// Capability pruning upstream should have excluded the application, so
    /// this signals a misconfigured platform rather than a runtime anomaly.
    #[error("capability '{capability}' is required but no provider data was supplied")]
    MissingCapabilityProviders {
        /// Name of the capability lacking provider data.
        capability: String,
    },

    // Input malformation
    /// A graph name in the request inputs is empty or malformed.
    #[error("invalid name for {field}: '{name}' ({reason})")]
    InvalidName {
        /// Where the name came from (e.g. `publishers[0]`).
        field: String,
        /// The offending name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The application namespace is empty or malformed.
    #[error("invalid application namespace '{namespace}': {reason}")]
    InvalidNamespace {
        /// The raw namespace value.
        namespace: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ResolveError {
    /// Whether this error is a contract breach by an upstream collaborator,
    /// as opposed to malformed input.
    #[must_use]
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::MissingCapabilityProviders { .. })
    }
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::MissingCapabilityProviders {
            capability: "std_capabilities/DifferentialMobileBase".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "capability 'std_capabilities/DifferentialMobileBase' is required but no provider data was supplied"
        );

        let err = ResolveError::InvalidName {
            field: "publishers[0]".to_string(),
            name: String::new(),
            reason: "name is empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid name for publishers[0]: '' (name is empty)"
        );
    }

    #[test]
    fn test_precondition_classification() {
        let missing = ResolveError::MissingCapabilityProviders {
            capability: "cam".to_string(),
        };
        assert!(missing.is_precondition_violation());

        let invalid = ResolveError::InvalidNamespace {
            namespace: "/".to_string(),
            reason: "namespace is empty".to_string(),
        };
        assert!(!invalid.is_precondition_violation());
    }
}
