//! Ordered source-to-target rule table for one process unit.

use indexmap::IndexMap;
use launchmap_core::RemapRule;

/// Ordered mapping from source name to target name.
///
/// Insertion order is preserved so the normalized rules come back in the
/// order their sources were first declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    entries: IndexMap<String, String>,
}

impl RuleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target for `from`, if a rule exists.
    #[must_use]
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries.get(from).map(String::as_str)
    }

    /// Whether a rule with source `from` exists.
    #[must_use]
    pub fn contains(&self, from: &str) -> bool {
        self.entries.contains_key(from)
    }

    /// Rewrite `name` through the table: the target if a rule exists,
    /// otherwise `name` unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(from, to)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert back into remap rules, in insertion order.
    #[must_use]
    pub fn to_rules(&self) -> Vec<RemapRule> {
        self.iter().map(|(from, to)| RemapRule::new(from, to)).collect()
    }

    /// Whether every lookup terminates after one hop.
    ///
    /// Holds when no rule targets a name that is itself the source of a rule
    /// pointing somewhere else.
    #[must_use]
    pub fn is_single_hop(&self) -> bool {
        self.entries
            .values()
            .all(|to| self.get(to).is_none_or(|next| next == to))
    }

    /// Insert `from -> to` unless `from` is already a source.
    ///
    /// Every existing rule that terminates at `from` is retargeted to the new
    /// rule's target. A `to` that is already a source is followed one hop,
    /// unless that hop leads back to `from`; a cycle keeps `to` as written.
    /// Returns the existing target when the insert is rejected.
    pub(crate) fn insert_collapsing(&mut self, from: &str, to: &str) -> Result<(), String> {
        if let Some(existing) = self.entries.get(from) {
            return Err(existing.clone());
        }

        let target = match self.resolve(to) {
            hop if hop == from => to.to_owned(),
            hop => hop.to_owned(),
        };
        for existing in self.entries.values_mut() {
            if existing.as_str() == from {
                existing.clone_from(&target);
            }
        }
        self.entries.insert(from.to_owned(), target);
        Ok(())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RuleTable {
    /// Build a table without collapsing; later duplicates overwrite.
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }
}
