//! Remap rules, process units and launch descriptors.
//!
//! A [`LaunchDescriptor`] is produced by an external templating step and is
//! owned by exactly one launch request. Resolution passes consume it and hand
//! back a rewritten copy.

use serde::{Deserialize, Serialize};

/// A single `from -> to` name substitution applied at connection time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemapRule {
    /// Source name as written by the process unit.
    pub from: String,
    /// Name the source is rewritten to.
    pub to: String,
}

impl RemapRule {
    /// Create a remap rule.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One spawnable unit inside a launch descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessUnit {
    /// Unit name, used for diagnostics.
    pub name: String,
    /// Remap rules in declaration order.
    #[serde(default)]
    pub remaps: Vec<RemapRule>,
}

impl ProcessUnit {
    /// Create a unit with no remap rules.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remaps: Vec::new(),
        }
    }

    /// Append a remap rule (builder form).
    #[must_use]
    pub fn with_remap(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.remaps.push(RemapRule::new(from, to));
        self
    }
}

/// Ordered set of process units for one launch request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDescriptor {
    /// Process units in launch order.
    #[serde(default)]
    pub units: Vec<ProcessUnit>,
}

impl LaunchDescriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process unit (builder form).
    #[must_use]
    pub fn with_unit(mut self, unit: ProcessUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// Append `rule` to every process unit.
    ///
    /// Units that never reference `rule.from` simply carry an inert entry.
    pub fn broadcast(&mut self, rule: &RemapRule) {
        for unit in &mut self.units {
            unit.remaps.push(rule.clone());
        }
    }

    /// Find a unit by name.
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&ProcessUnit> {
        self.units.iter().find(|u| u.name == name)
    }

    /// Number of process units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the descriptor has no process units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_reaches_every_unit() {
        let mut descriptor = LaunchDescriptor::new()
            .with_unit(ProcessUnit::new("driver").with_remap("odom", "/base/odom"))
            .with_unit(ProcessUnit::new("teleop"));

        descriptor.broadcast(&RemapRule::new("cmd_vel", "/robot1/cmd_vel"));

        let driver = descriptor.unit("driver").unwrap();
        assert_eq!(driver.remaps.len(), 2);
        assert_eq!(driver.remaps[1], RemapRule::new("cmd_vel", "/robot1/cmd_vel"));

        let teleop = descriptor.unit("teleop").unwrap();
        assert_eq!(teleop.remaps, vec![RemapRule::new("cmd_vel", "/robot1/cmd_vel")]);
    }

    #[test]
    fn test_descriptor_deserialize_defaults() {
        let json = r#"{"units":[{"name":"camera"},{"name":"viewer","remaps":[{"from":"image","to":"/camera/rgb"}]}]}"#;
        let descriptor: LaunchDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.len(), 2);
        assert!(descriptor.units[0].remaps.is_empty());
        assert_eq!(descriptor.units[1].remaps[0].to, "/camera/rgb");
        assert!(descriptor.unit("missing").is_none());
    }
}
