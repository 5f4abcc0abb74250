//! Resolution pipeline for one launch request.
//!
//! Sequence (default order):
//! 1. Validate interface and request names (optional)
//! 2. Inject capability rewrites
//! 3. Resolve the public interface, broadcasting requested rewrites
//! 4. Collapse duplicates and chains in every unit
//!
//! Steps 2 and 3 can be swapped with [`PassOrder::InterfaceFirst`]. Either
//! way the chain collapse runs last over everything the earlier passes added.

use std::fmt;
use std::sync::Arc;

use launchmap_config::{MatchStrategySetting, PassOrderSetting, ResolverSection};
use launchmap_core::{
    ApplicationNamespace, CapabilityRequirement, Diagnostics, LaunchDescriptor, PublicInterface,
    RemapRequest, ResolveResult, ResolvedInterface, validate,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::capability::{CapabilityReport, inject_capability_remaps};
use crate::chain::collapse_descriptor;
use crate::interface::resolve_interface;
use crate::matcher::{MatchStrategy, SourcePredicate, TokenMatcher};

/// Order of the two rule-producing passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassOrder {
    /// Capability injection, then interface resolution.
    #[default]
    CapabilitiesFirst,
    /// Interface resolution, then capability injection. Capability tokens
    /// then also see the broadcast rules.
    InterfaceFirst,
}

/// Pipeline behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Which rule-producing pass runs first.
    pub pass_order: PassOrder,
    /// Built-in capability token matcher.
    pub match_strategy: MatchStrategy,
    /// Reject malformed names before resolving.
    pub validate_inputs: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            pass_order: PassOrder::default(),
            match_strategy: MatchStrategy::default(),
            validate_inputs: true,
        }
    }
}

impl From<&ResolverSection> for PipelineOptions {
    fn from(section: &ResolverSection) -> Self {
        Self {
            pass_order: match section.pass_order {
                PassOrderSetting::CapabilitiesFirst => PassOrder::CapabilitiesFirst,
                PassOrderSetting::InterfaceFirst => PassOrder::InterfaceFirst,
            },
            match_strategy: match section.match_strategy {
                MatchStrategySetting::Substring => MatchStrategy::Substring,
                MatchStrategySetting::Exact => MatchStrategy::Exact,
                MatchStrategySetting::Glob => MatchStrategy::Glob,
            },
            validate_inputs: section.validate_inputs,
        }
    }
}

/// Everything needed to resolve one launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Templated launch descriptor, owned by this request.
    pub descriptor: LaunchDescriptor,
    /// Namespace allocated for this instance.
    pub namespace: ApplicationNamespace,
    /// Interface the application declares.
    #[serde(default)]
    pub public_interface: PublicInterface,
    /// Capabilities the application depends on.
    #[serde(default)]
    pub capabilities: Vec<CapabilityRequirement>,
    /// Rewrites requested by the starting client.
    #[serde(default)]
    pub remappings: Vec<RemapRequest>,
}

impl LaunchRequest {
    /// Create a request with no interface, capabilities or remaps.
    #[must_use]
    pub fn new(descriptor: LaunchDescriptor, namespace: ApplicationNamespace) -> Self {
        Self {
            descriptor,
            namespace,
            public_interface: PublicInterface::new(),
            capabilities: Vec::new(),
            remappings: Vec::new(),
        }
    }

    /// Set the declared public interface.
    #[must_use]
    pub fn with_public_interface(mut self, interface: PublicInterface) -> Self {
        self.public_interface = interface;
        self
    }

    /// Add a capability requirement.
    #[must_use]
    pub fn with_capability(mut self, requirement: CapabilityRequirement) -> Self {
        self.capabilities.push(requirement);
        self
    }

    /// Add a client remap request.
    #[must_use]
    pub fn with_remap(mut self, request: RemapRequest) -> Self {
        self.remappings.push(request);
        self
    }
}

/// Result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Normalized descriptor for the process spawner.
    pub descriptor: LaunchDescriptor,
    /// Final absolute names for external exposure.
    pub interface: ResolvedInterface,
    /// Per-token capability outcomes.
    pub capabilities: CapabilityReport,
    /// Non-fatal anomalies, in the order they were observed.
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// Emit the diagnostics as `warn` events.
    pub fn report(&self) {
        self.diagnostics.report();
    }
}

/// Runs the resolution passes over launch requests.
///
/// Holds no per-request state; one pipeline can serve concurrent requests.
#[derive(Clone)]
pub struct ResolutionPipeline {
    options: PipelineOptions,
    matcher: Arc<dyn TokenMatcher>,
}

impl fmt::Debug for ResolutionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionPipeline")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for ResolutionPipeline {
    fn default() -> Self {
        Self::new(PipelineOptions::default())
    }
}

impl ResolutionPipeline {
    /// Create a pipeline using the built-in matcher named in `options`.
    #[must_use]
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            matcher: Arc::new(StrategyMatcher(options.match_strategy)),
        }
    }

    /// Create a pipeline from the `[resolver]` config section.
    #[must_use]
    pub fn from_config(section: &ResolverSection) -> Self {
        Self::new(PipelineOptions::from(section))
    }

    /// Replace the token matcher with a custom one.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Arc<dyn TokenMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// The options this pipeline was built with.
    #[must_use]
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Resolve one launch request.
    ///
    /// # Errors
    ///
    /// Returns [`launchmap_core::ResolveError::InvalidName`] for malformed
    /// inputs (when validation is enabled) and
    /// [`launchmap_core::ResolveError::MissingCapabilityProviders`] when a
    /// capability arrives without provider data. No descriptor is produced in
    /// either case.
    pub fn resolve(&self, request: LaunchRequest) -> ResolveResult<Resolution> {
        let span = info_span!(
            "resolve_launch",
            namespace = %request.namespace,
            units = request.descriptor.len(),
        );
        let _guard = span.enter();

        let LaunchRequest {
            descriptor,
            namespace,
            public_interface,
            capabilities,
            remappings,
        } = request;

        if self.options.validate_inputs {
            validate::validate_public_interface(&public_interface)?;
            validate::validate_remap_requests(&remappings)?;
        }

        let mut diagnostics = Diagnostics::new();
        let matcher = self.matcher.as_ref();

        let (descriptor, interface, report) = match self.options.pass_order {
            PassOrder::CapabilitiesFirst => {
                let (descriptor, report) =
                    inject_capability_remaps(descriptor, &capabilities, matcher, &mut diagnostics)?;
                let (descriptor, interface) =
                    resolve_interface(descriptor, &public_interface, &remappings, &namespace);
                (descriptor, interface, report)
            },
            PassOrder::InterfaceFirst => {
                let (descriptor, interface) =
                    resolve_interface(descriptor, &public_interface, &remappings, &namespace);
                let (descriptor, report) =
                    inject_capability_remaps(descriptor, &capabilities, matcher, &mut diagnostics)?;
                (descriptor, interface, report)
            },
        };
        debug!(exposed = interface.len(), "public interface resolved");

        let descriptor = collapse_descriptor(descriptor, &mut diagnostics);

        info!(
            exposed = interface.len(),
            diagnostics = diagnostics.len(),
            "launch resolved"
        );

        Ok(Resolution {
            descriptor,
            interface,
            capabilities: report,
            diagnostics,
        })
    }
}

/// Adapter so built-in strategies share the custom matcher slot.
struct StrategyMatcher(MatchStrategy);

impl TokenMatcher for StrategyMatcher {
    fn matches(&self, token: &str, source: &str) -> bool {
        self.0.matcher().matches(token, source)
    }

    fn compile<'a>(&'a self, token: &'a str) -> SourcePredicate<'a> {
        self.0.matcher().compile(token)
    }
}
