//! Chain collapse for accumulated remap rules.
//!
//! Runs once at the end of the pipeline over each unit's full rule list
//! (launch rules, capability rewrites and interface broadcasts), so chains
//! started by one contributor and completed by another are caught.

use launchmap_core::{Diagnostic, Diagnostics, LaunchDescriptor, ProcessUnit, RemapRule};
use tracing::debug;

use crate::table::RuleTable;

/// Normalize one unit's rules into a [`RuleTable`].
///
/// Rules are processed strictly in order. A rule whose source already exists
/// is discarded and recorded in `diagnostics`. Any existing rule that ended at
/// the new rule's source is retargeted, and a target that is already a source
/// is followed one hop (cycles excepted), so every lookup takes at most one
/// hop.
pub fn collapse_chains(
    unit: &str,
    rules: &[RemapRule],
    diagnostics: &mut Diagnostics,
) -> RuleTable {
    let mut table = RuleTable::new();

    for rule in rules {
        if let Err(kept) = table.insert_collapsing(&rule.from, &rule.to) {
            debug!(unit, from = %rule.from, kept = %kept, discarded = %rule.to, "duplicate remap discarded");
            diagnostics.push(Diagnostic::DuplicateRemap {
                unit: unit.to_owned(),
                from: rule.from.clone(),
                kept,
                discarded: rule.to.clone(),
            });
        }
    }

    table
}

/// Collapse every unit of `descriptor`, returning the normalized descriptor.
#[must_use]
pub fn collapse_descriptor(
    descriptor: LaunchDescriptor,
    diagnostics: &mut Diagnostics,
) -> LaunchDescriptor {
    let units = descriptor
        .units
        .into_iter()
        .map(|unit| {
            let table = collapse_chains(&unit.name, &unit.remaps, diagnostics);
            ProcessUnit {
                name: unit.name,
                remaps: table.to_rules(),
            }
        })
        .collect();

    LaunchDescriptor { units }
}
