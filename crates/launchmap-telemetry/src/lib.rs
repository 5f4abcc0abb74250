//! Launchmap Telemetry - Logging setup for launchmap.
//!
//! Resolution components emit `tracing` events and spans; this crate installs
//! the subscriber that renders them.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchmap_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), launchmap_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("launchmap_resolve=debug");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```
//!
//! With the `config` feature, a [`LogConfig`] can be built from the
//! `[logging]` section of a loaded `launchmap_config::Config`, or the
//! subscriber installed from it directly:
//!
//! ```rust,ignore
//! let resolved = launchmap_config::Config::load()?;
//! launchmap_telemetry::setup_logging_from_config(&resolved.config.logging)?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{FileRotation, LogConfig, LogFormat, LogTarget, setup_logging};

#[cfg(feature = "config")]
pub use logging::setup_logging_from_config;
