//! Configuration types.
//!
//! Every struct implements [`Default`] with the same values as the embedded
//! `defaults.toml`, so a bare `[section]` header produces a working setup.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resolution pipeline behaviour.
    pub resolver: ResolverSection,
    /// Logging level, format, and per-crate directives.
    pub logging: LoggingSection,
}

// ---------------------------------------------------------------------------
// ResolverSection
// ---------------------------------------------------------------------------

/// Order of the two rule-producing passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassOrderSetting {
    /// Inject capability rewrites, then resolve the public interface.
    #[default]
    CapabilitiesFirst,
    /// Resolve the public interface, then inject capability rewrites.
    InterfaceFirst,
}

/// How capability tokens are matched against remap sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategySetting {
    /// Token appears anywhere in the source.
    #[default]
    Substring,
    /// Token equals the source.
    Exact,
    /// Token is a glob pattern over the whole source.
    Glob,
}

/// Resolution pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSection {
    /// Which rule-producing pass runs first.
    pub pass_order: PassOrderSetting,
    /// Capability token matching strategy.
    pub match_strategy: MatchStrategySetting,
    /// Reject malformed interface and request names before resolving.
    pub validate_inputs: bool,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            pass_order: PassOrderSetting::default(),
            match_strategy: MatchStrategySetting::default(),
            validate_inputs: true,
        }
    }
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Per-crate tracing directives (e.g. `["launchmap_resolve=debug"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "pretty".to_owned(),
            directives: Vec::new(),
        }
    }
}
