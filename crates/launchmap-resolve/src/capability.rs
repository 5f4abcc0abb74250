//! Capability rewrite injection.
//!
//! Each capability the application depends on supplies `(token, target)`
//! pairs. Every existing rule, in every process unit, whose source the
//! matcher selects for a token gets its target overwritten. This is a
//! broadcast overwrite: all matching rules are rewritten, not just the first.

use launchmap_core::{
    CapabilityRemap, CapabilityRequirement, Diagnostic, Diagnostics, LaunchDescriptor,
    ResolveError, ResolveResult,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::matcher::TokenMatcher;

/// Outcome of one capability token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenOutcome {
    /// Capability the token belongs to.
    pub capability: String,
    /// The token.
    pub token: String,
    /// Target written into matching rules.
    pub target: String,
    /// Number of rules rewritten across all units.
    pub rewritten: usize,
}

impl TokenOutcome {
    /// Whether at least one rule was rewritten.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.rewritten > 0
    }
}

/// Per-token results of capability injection, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    /// One entry per `(capability, token)` pair processed.
    pub tokens: Vec<TokenOutcome>,
}

impl CapabilityReport {
    /// Tokens that rewrote at least one rule.
    pub fn satisfied(&self) -> impl Iterator<Item = &TokenOutcome> + '_ {
        self.tokens.iter().filter(|t| t.is_satisfied())
    }

    /// Tokens that matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &TokenOutcome> + '_ {
        self.tokens.iter().filter(|t| !t.is_satisfied())
    }
}

/// Apply capability rewrites to every process unit of `descriptor`.
///
/// Provider data for every requirement is checked before any rule is
/// touched, so a failure leaves nothing half-applied. Tokens that match no
/// rule are recorded in `diagnostics` and do not stop resolution. When two
/// tokens select the same rule, the later one in requirement order wins.
///
/// # Errors
///
/// Returns [`ResolveError::MissingCapabilityProviders`] if any requirement
/// has no provider data at all.
pub fn inject_capability_remaps(
    mut descriptor: LaunchDescriptor,
    requirements: &[CapabilityRequirement],
    matcher: &dyn TokenMatcher,
    diagnostics: &mut Diagnostics,
) -> ResolveResult<(LaunchDescriptor, CapabilityReport)> {
    let provided = provider_remaps(requirements)?;

    let mut report = CapabilityReport::default();
    for (capability, remaps) in provided {
        info!(capability, "configuring capability remappings");
        for remap in remaps {
            let rewritten = rewrite_matching(&mut descriptor, remap, matcher);
            if rewritten == 0 {
                diagnostics.push(Diagnostic::UnmatchedCapabilityToken {
                    capability: capability.to_owned(),
                    token: remap.token.clone(),
                });
            }
            report.tokens.push(TokenOutcome {
                capability: capability.to_owned(),
                token: remap.token.clone(),
                target: remap.target.clone(),
                rewritten,
            });
        }
    }

    Ok((descriptor, report))
}

/// Pair each requirement with its provider remaps, failing on the first
/// requirement that has none.
fn provider_remaps(
    requirements: &[CapabilityRequirement],
) -> ResolveResult<Vec<(&str, &[CapabilityRemap])>> {
    requirements
        .iter()
        .map(|req| match &req.remappings {
            Some(remaps) => Ok((req.name.as_str(), remaps.as_slice())),
            None => Err(ResolveError::MissingCapabilityProviders {
                capability: req.name.clone(),
            }),
        })
        .collect()
}

fn rewrite_matching(
    descriptor: &mut LaunchDescriptor,
    remap: &CapabilityRemap,
    matcher: &dyn TokenMatcher,
) -> usize {
    let selects = matcher.compile(&remap.token);
    let mut rewritten: usize = 0;
    for unit in &mut descriptor.units {
        for rule in &mut unit.remaps {
            if selects(rule.from.as_str()) {
                debug!(unit = %unit.name, from = %rule.from, to = %remap.target, "capability remap applied");
                rule.to.clone_from(&remap.target);
                rewritten = rewritten.saturating_add(1);
            }
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{ExactMatcher, GlobMatcher, SubstringMatcher};
    use launchmap_core::ProcessUnit;

    fn camera_descriptor() -> LaunchDescriptor {
        LaunchDescriptor::new()
            .with_unit(
                ProcessUnit::new("detector")
                    .with_remap("/camera/image_raw", "image")
                    .with_remap("/camera/camera_info", "camera_info"),
            )
            .with_unit(ProcessUnit::new("viewer").with_remap("/camera/image_raw/compressed", "image"))
    }

    #[test]
    fn test_substring_injection_rewrites_all_matches() {
        let req = CapabilityRequirement::new("rocon_apps/Camera")
            .with_remap("/camera/image", "/usb_cam/image_raw");
        let mut diags = Diagnostics::new();

        let (out, report) =
            inject_capability_remaps(camera_descriptor(), &[req], &SubstringMatcher, &mut diags)
                .unwrap();

        let detector = out.unit("detector").unwrap();
        assert_eq!(detector.remaps[0].to, "/usb_cam/image_raw");
        assert_eq!(detector.remaps[1].to, "camera_info");
        let viewer = out.unit("viewer").unwrap();
        assert_eq!(viewer.remaps[0].to, "/usb_cam/image_raw");

        assert_eq!(report.tokens.len(), 1);
        assert_eq!(report.tokens[0].rewritten, 2);
        assert_eq!(report.satisfied().count(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unmatched_token_is_diagnostic() {
        let req = CapabilityRequirement::new("rocon_apps/Depth")
            .with_remap("/camera/depth", "/kinect/depth");
        let mut diags = Diagnostics::new();

        let (out, report) =
            inject_capability_remaps(camera_descriptor(), &[req], &SubstringMatcher, &mut diags)
                .unwrap();

        assert_eq!(out, camera_descriptor());
        assert_eq!(report.unmatched().count(), 1);
        assert_eq!(diags.len(), 1);
        assert!(matches!(
            diags.iter().next(),
            Some(Diagnostic::UnmatchedCapabilityToken { token, .. }) if token == "/camera/depth"
        ));
    }

    #[test]
    fn test_missing_providers_is_fatal_and_applies_nothing() {
        let ok = CapabilityRequirement::new("rocon_apps/Camera")
            .with_remap("/camera/image", "/usb_cam/image_raw");
        let missing = CapabilityRequirement::new("rocon_apps/Base");
        let mut diags = Diagnostics::new();

        let err = inject_capability_remaps(
            camera_descriptor(),
            &[ok, missing],
            &SubstringMatcher,
            &mut diags,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ResolveError::MissingCapabilityProviders {
                capability: "rocon_apps/Base".to_string()
            }
        );
        assert!(err.is_precondition_violation());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_later_token_wins_on_same_rule() {
        let req = CapabilityRequirement::new("cam")
            .with_remap("/camera", "/first")
            .with_remap("image_raw", "/second");
        let mut diags = Diagnostics::new();

        let (out, _) =
            inject_capability_remaps(camera_descriptor(), &[req], &SubstringMatcher, &mut diags)
                .unwrap();

        assert_eq!(out.unit("detector").unwrap().remaps[0].to, "/second");
        assert_eq!(out.unit("detector").unwrap().remaps[1].to, "/first");
    }

    #[test]
    fn test_exact_matcher_is_stricter() {
        let req = CapabilityRequirement::new("cam").with_remap("/camera/image", "/usb_cam/image_raw");
        let mut diags = Diagnostics::new();

        let (_, report) =
            inject_capability_remaps(camera_descriptor(), &[req], &ExactMatcher, &mut diags)
                .unwrap();

        assert_eq!(report.tokens[0].rewritten, 0);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_invalid_glob_token_reported_as_unmatched() {
        let req = CapabilityRequirement::new("cam").with_remap("/camera/[image", "/usb_cam/image_raw");
        let mut diags = Diagnostics::new();

        let (out, report) =
            inject_capability_remaps(camera_descriptor(), &[req], &GlobMatcher, &mut diags)
                .unwrap();

        assert_eq!(out, camera_descriptor());
        assert_eq!(report.unmatched().count(), 1);
        assert!(matches!(
            diags.iter().next(),
            Some(Diagnostic::UnmatchedCapabilityToken { token, .. }) if token == "/camera/[image"
        ));
    }

    #[test]
    fn test_provider_without_remaps_is_not_fatal() {
        let req = CapabilityRequirement::new("noop").provided();
        let mut diags = Diagnostics::new();

        let (out, report) =
            inject_capability_remaps(camera_descriptor(), &[req], &SubstringMatcher, &mut diags)
                .unwrap();

        assert_eq!(out, camera_descriptor());
        assert!(report.tokens.is_empty());
        assert!(diags.is_empty());
    }
}
