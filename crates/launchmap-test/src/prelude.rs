//! Prelude module - commonly used test helpers.
//!
//! Use `use launchmap_test::prelude::*;` to import all fixtures.

// Fixtures
pub use crate::fixtures::{
    test_base_capability, test_capability, test_launch_descriptor, test_namespace,
    test_public_interface, test_remap_requests, test_unprovided_capability,
};

// Harness
pub use crate::harness::setup_test_logging;
