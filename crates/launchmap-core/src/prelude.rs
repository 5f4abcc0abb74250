//! Prelude module - commonly used types for convenient import.
//!
//! Use `use launchmap_core::prelude::*;` to import all essential types.

// Errors
pub use crate::{ResolveError, ResolveResult};

// Launch model
pub use crate::{LaunchDescriptor, ProcessUnit, RemapRule};

// Interfaces and requests
pub use crate::{EndpointKind, EndpointListing, PublicInterface, RemapRequest, ResolvedInterface};

// Capabilities
pub use crate::{CapabilityRemap, CapabilityRequirement};

// Namespaces and diagnostics
pub use crate::{ApplicationNamespace, Diagnostic, Diagnostics};
