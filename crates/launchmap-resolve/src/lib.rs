//! Launchmap Resolve - Endpoint remap resolution for launched applications.
//!
//! Three independent authorities name an application's endpoints: the
//! application's own launch rules, the capabilities it depends on, and the
//! client starting it. This crate reconciles them into one rule set per
//! process unit plus the final externally visible interface.
//!
//! Passes, in default order:
//! 1. [`inject_capability_remaps`] rewrites targets of rules whose source
//!    matches a capability token
//! 2. [`resolve_interface`] qualifies public names and broadcasts rules for
//!    client-requested rewrites
//! 3. [`collapse_descriptor`] drops duplicate sources and collapses chains
//!
//! # Example
//!
//! ```
//! use launchmap_core::{
//!     ApplicationNamespace, EndpointKind, LaunchDescriptor, ProcessUnit, PublicInterface,
//!     RemapRequest,
//! };
//! use launchmap_resolve::{LaunchRequest, ResolutionPipeline};
//!
//! let descriptor = LaunchDescriptor::new()
//!     .with_unit(ProcessUnit::new("driver").with_remap("velocity", "cmd_vel"));
//! let request = LaunchRequest::new(descriptor, ApplicationNamespace::new("robot1").unwrap())
//!     .with_public_interface(
//!         PublicInterface::new()
//!             .with(EndpointKind::Subscriber, "cmd_vel")
//!             .with(EndpointKind::Publisher, "odom"),
//!     )
//!     .with_remap(RemapRequest::new("cmd_vel", "teleop/cmd_vel"));
//!
//! let resolution = ResolutionPipeline::default().resolve(request).unwrap();
//!
//! assert_eq!(resolution.interface.subscribers, ["/robot1/teleop/cmd_vel"]);
//! assert_eq!(resolution.interface.publishers, ["/robot1/odom"]);
//! let driver = resolution.descriptor.unit("driver").unwrap();
//! assert_eq!(driver.remaps[0].to, "/robot1/teleop/cmd_vel");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod capability;
mod chain;
mod interface;
mod matcher;
mod pipeline;
mod table;

pub use capability::{CapabilityReport, TokenOutcome, inject_capability_remaps};
pub use chain::{collapse_chains, collapse_descriptor};
pub use interface::resolve_interface;
pub use matcher::{
    ExactMatcher, GlobMatcher, MatchStrategy, SourcePredicate, SubstringMatcher, TokenMatcher,
};
pub use pipeline::{LaunchRequest, PassOrder, PipelineOptions, Resolution, ResolutionPipeline};
pub use table::RuleTable;
