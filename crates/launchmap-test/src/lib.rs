//! Launchmap Test - Shared test utilities for launchmap.
//!
//! Fixtures model a small mobile-robot application (a base driver, a camera
//! detector and a teleop bridge) together with its public interface,
//! capability requirements and client remap requests.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! launchmap-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use launchmap_test::{test_launch_descriptor, test_namespace};
//!
//! let descriptor = test_launch_descriptor();
//! assert_eq!(descriptor.len(), 3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
