//! Prelude module - commonly used types for convenient import.
//!
//! Use `use launchmap_telemetry::prelude::*;` to import all essential types.

// Errors
pub use crate::{TelemetryError, TelemetryResult};

// Logging configuration
pub use crate::{FileRotation, LogConfig, LogFormat, LogTarget};

// Setup functions
pub use crate::setup_logging;
#[cfg(feature = "config")]
pub use crate::setup_logging_from_config;
