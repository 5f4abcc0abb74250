//! Launchmap Core - Data model for endpoint remapping of launched applications.
//!
//! This crate provides:
//! - Endpoint categories and per-category interface listings
//! - Remap rules, process units and launch descriptors
//! - Capability requirements and client remap requests
//! - Application namespaces and graph-name helpers
//! - Per-request diagnostics and the fatal error taxonomy
//! - Input validation run before resolution
//!
//! # Example
//!
//! ```
//! use launchmap_core::{ApplicationNamespace, LaunchDescriptor, ProcessUnit, names};
//!
//! let ns = ApplicationNamespace::new("robot1").unwrap();
//! assert_eq!(names::qualify(&ns, "odom"), "/robot1/odom");
//!
//! let descriptor = LaunchDescriptor::new()
//!     .with_unit(ProcessUnit::new("camera").with_remap("image", "/camera/image_raw"));
//! assert_eq!(descriptor.len(), 1);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod names;
pub mod validate;

mod capability;
mod diagnostic;
mod endpoint;
mod error;
mod launch;
mod request;

pub use capability::{CapabilityRemap, CapabilityRequirement};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use endpoint::{EndpointKind, EndpointListing, PublicInterface, ResolvedInterface};
pub use error::{ResolveError, ResolveResult};
pub use launch::{LaunchDescriptor, ProcessUnit, RemapRule};
pub use names::ApplicationNamespace;
pub use request::RemapRequest;
