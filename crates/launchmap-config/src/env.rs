//! Environment variable fallbacks.
//!
//! Variables only fill fields that no config file set; a value from the
//! system or user layer always wins.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::merge::{ConfigLayer, FieldSources, set_nested};

/// Prefix of every variable this crate reads.
pub const ENV_PREFIX: &str = "LAUNCHMAP_";

/// Variable that relocates the user config directory.
pub const HOME_VAR: &str = "LAUNCHMAP_HOME";

#[derive(Clone, Copy)]
enum EnvValue {
    Str,
    Bool,
}

/// `(variable, dotted config path, value kind)`.
const ENV_FALLBACKS: &[(&str, &str, EnvValue)] = &[
    ("LAUNCHMAP_PASS_ORDER", "resolver.pass_order", EnvValue::Str),
    (
        "LAUNCHMAP_MATCH_STRATEGY",
        "resolver.match_strategy",
        EnvValue::Str,
    ),
    (
        "LAUNCHMAP_VALIDATE_INPUTS",
        "resolver.validate_inputs",
        EnvValue::Bool,
    ),
    ("LAUNCHMAP_LOG_LEVEL", "logging.level", EnvValue::Str),
    ("LAUNCHMAP_LOG_FORMAT", "logging.format", EnvValue::Str),
];

/// Snapshot every `LAUNCHMAP_*` variable from the process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with(ENV_PREFIX))
        .collect()
}

/// Apply fallbacks from `env_vars` to fields still holding their default.
///
/// Returns the number of fields that were set.
pub fn apply_env_fallbacks(
    merged: &mut toml::Value,
    sources: &mut FieldSources,
    env_vars: &HashMap<String, String>,
) -> usize {
    let mut applied = Vec::new();

    for &(var, path, kind) in ENV_FALLBACKS {
        let Some(raw) = env_vars.get(var) else {
            continue;
        };

        let from_file = matches!(
            sources.get(path),
            Some(ConfigLayer::System | ConfigLayer::User)
        );
        if from_file {
            debug!(var, path, "config file value takes precedence over env var");
            continue;
        }

        let value = match kind {
            EnvValue::Str => toml::Value::String(raw.clone()),
            EnvValue::Bool => match parse_bool(raw) {
                Some(b) => toml::Value::Boolean(b),
                None => {
                    warn!(var, value = %raw, "ignoring non-boolean env var");
                    continue;
                },
            },
        };

        let segments: Vec<&str> = path.split('.').collect();
        set_nested(merged, &segments, value);
        sources.insert(path.to_owned(), ConfigLayer::Environment);
        applied.push(var);
    }

    applied.len()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
