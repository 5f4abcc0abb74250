//! External interface resolution.
//!
//! Computes the absolute names the application exposes and, for every
//! client-requested rewrite of a public endpoint, broadcasts the rewrite to
//! all process units.

use launchmap_core::{
    ApplicationNamespace, EndpointKind, LaunchDescriptor, PublicInterface, RemapRequest,
    RemapRule, ResolvedInterface, names,
};
use tracing::debug;

/// Resolve the public interface against the client's remap requests.
///
/// For each declared name, the first request (in request order) whose source
/// equals it decides the final name: an absolute target is used verbatim, a
/// relative one is rooted under `namespace`, and the rewrite is appended to
/// every unit. Names without a request are rooted under `namespace` unless
/// already absolute, and add no rule, since the instance already runs inside
/// the namespace.
#[must_use]
pub fn resolve_interface(
    mut descriptor: LaunchDescriptor,
    interface: &PublicInterface,
    requests: &[RemapRequest],
    namespace: &ApplicationNamespace,
) -> (LaunchDescriptor, ResolvedInterface) {
    let mut resolved = ResolvedInterface::new();

    for kind in EndpointKind::ALL {
        for name in interface.names(kind) {
            let exposed = match requests.iter().find(|r| r.from == *name) {
                Some(request) => {
                    let target = absolute_name(namespace, &request.to);
                    debug!(%kind, from = %name, to = %target, "broadcasting requested remap");
                    descriptor.broadcast(&RemapRule::new(name.as_str(), target.as_str()));
                    target
                },
                None => absolute_name(namespace, name),
            };
            resolved.push(kind, exposed);
        }
    }

    (descriptor, resolved)
}

fn absolute_name(namespace: &ApplicationNamespace, name: &str) -> String {
    if names::is_absolute(name) {
        name.to_owned()
    } else {
        names::qualify(namespace, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchmap_core::ProcessUnit;

    fn ns() -> ApplicationNamespace {
        ApplicationNamespace::new("robot1").unwrap()
    }

    fn two_units() -> LaunchDescriptor {
        LaunchDescriptor::new()
            .with_unit(ProcessUnit::new("driver"))
            .with_unit(ProcessUnit::new("teleop"))
    }

    #[test]
    fn test_unrequested_relative_name_is_qualified_without_rule() {
        let interface = PublicInterface::new().with(EndpointKind::Publisher, "odom");

        let (out, resolved) = resolve_interface(two_units(), &interface, &[], &ns());

        assert_eq!(resolved.publishers, ["/robot1/odom"]);
        assert_eq!(out, two_units());
    }

    #[test]
    fn test_unrequested_absolute_name_passes_through() {
        let interface = PublicInterface::new().with(EndpointKind::Service, "/map_server/get_map");

        let (_, resolved) = resolve_interface(two_units(), &interface, &[], &ns());

        assert_eq!(resolved.services, ["/map_server/get_map"]);
    }

    #[test]
    fn test_relative_request_target() {
        let interface = PublicInterface::new().with(EndpointKind::Subscriber, "cmd_vel");
        let requests = [RemapRequest::new("cmd_vel", "teleop/cmd_vel")];

        let (out, resolved) = resolve_interface(two_units(), &interface, &requests, &ns());

        assert_eq!(resolved.subscribers, ["/robot1/teleop/cmd_vel"]);
        for unit in &out.units {
            assert_eq!(
                unit.remaps,
                vec![RemapRule::new("cmd_vel", "/robot1/teleop/cmd_vel")]
            );
        }
    }

    #[test]
    fn test_absolute_request_target_ignores_namespace() {
        let interface = PublicInterface::new().with(EndpointKind::Subscriber, "cmd_vel");
        let requests = [RemapRequest::new("cmd_vel", "/shared/cmd_vel")];

        let (out, resolved) = resolve_interface(two_units(), &interface, &requests, &ns());

        assert_eq!(resolved.subscribers, ["/shared/cmd_vel"]);
        assert_eq!(out.units[1].remaps[0].to, "/shared/cmd_vel");
    }

    #[test]
    fn test_first_matching_request_wins() {
        let interface = PublicInterface::new().with(EndpointKind::Publisher, "odom");
        let requests = [
            RemapRequest::new("odom", "first/odom"),
            RemapRequest::new("odom", "second/odom"),
        ];

        let (out, resolved) = resolve_interface(two_units(), &interface, &requests, &ns());

        assert_eq!(resolved.publishers, ["/robot1/first/odom"]);
        assert_eq!(out.units[0].remaps.len(), 1);
    }

    #[test]
    fn test_requests_for_undeclared_names_are_ignored() {
        let interface = PublicInterface::new().with(EndpointKind::Publisher, "odom");
        let requests = [RemapRequest::new("scan", "/shared/scan")];

        let (out, resolved) = resolve_interface(two_units(), &interface, &requests, &ns());

        assert_eq!(resolved.publishers, ["/robot1/odom"]);
        assert!(out.units.iter().all(|u| u.remaps.is_empty()));
    }

    #[test]
    fn test_categories_resolved_independently() {
        let interface = PublicInterface::new()
            .with(EndpointKind::ActionServer, "navigate")
            .with(EndpointKind::ActionClient, "/dock")
            .with(EndpointKind::Publisher, "odom");
        let requests = [RemapRequest::new("navigate", "nav/navigate")];

        let (_, resolved) = resolve_interface(two_units(), &interface, &requests, &ns());

        assert_eq!(resolved.action_servers, ["/robot1/nav/navigate"]);
        assert_eq!(resolved.action_clients, ["/dock"]);
        assert_eq!(resolved.publishers, ["/robot1/odom"]);
        assert_eq!(resolved.len(), 3);
    }
}
