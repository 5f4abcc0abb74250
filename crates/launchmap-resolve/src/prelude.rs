//! Prelude module - commonly used types for convenient import.
//!
//! Use `use launchmap_resolve::prelude::*;` to import all essential types.

// Pipeline
pub use crate::{LaunchRequest, PassOrder, PipelineOptions, Resolution, ResolutionPipeline};

// Individual passes
pub use crate::{collapse_chains, collapse_descriptor, inject_capability_remaps, resolve_interface};

// Rule tables and reports
pub use crate::{CapabilityReport, RuleTable, TokenOutcome};

// Token matching
pub use crate::{
    ExactMatcher, GlobMatcher, MatchStrategy, SourcePredicate, SubstringMatcher, TokenMatcher,
};
