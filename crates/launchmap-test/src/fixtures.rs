//! Test fixtures for common types.

use launchmap_core::{
    ApplicationNamespace, CapabilityRequirement, EndpointKind, LaunchDescriptor, ProcessUnit,
    PublicInterface, RemapRequest,
};

/// Namespace allocated to the application instance (`/robot1`).
///
/// # Panics
///
/// Panics if the namespace literal is rejected.
#[must_use]
pub fn test_namespace() -> ApplicationNamespace {
    ApplicationNamespace::new("robot1").expect("valid namespace literal")
}

/// Three-unit launch descriptor.
///
/// - `base_driver`: `cmd_vel -> mobile_base/commands/velocity`,
///   `odom -> mobile_base/odom`
/// - `detector`: `/camera/image_raw -> image`,
///   `/camera/camera_info -> camera_info`
/// - `teleop`: `teleop/cmd_vel -> cmd_vel`
#[must_use]
pub fn test_launch_descriptor() -> LaunchDescriptor {
    LaunchDescriptor::new()
        .with_unit(
            ProcessUnit::new("base_driver")
                .with_remap("cmd_vel", "mobile_base/commands/velocity")
                .with_remap("odom", "mobile_base/odom"),
        )
        .with_unit(
            ProcessUnit::new("detector")
                .with_remap("/camera/image_raw", "image")
                .with_remap("/camera/camera_info", "camera_info"),
        )
        .with_unit(ProcessUnit::new("teleop").with_remap("teleop/cmd_vel", "cmd_vel"))
}

/// Public interface declared by the application.
///
/// Subscribes to `cmd_vel`, publishes `odom` and the absolute `/tf`, and
/// serves the `navigate` action.
#[must_use]
pub fn test_public_interface() -> PublicInterface {
    PublicInterface::new()
        .with(EndpointKind::Subscriber, "cmd_vel")
        .with(EndpointKind::Publisher, "odom")
        .with(EndpointKind::Publisher, "/tf")
        .with(EndpointKind::ActionServer, "navigate")
}

/// Camera capability whose provider serves images under `/usb_cam`.
///
/// Token `/camera/image` matches `/camera/image_raw` by substring.
#[must_use]
pub fn test_capability() -> CapabilityRequirement {
    CapabilityRequirement::new("rocon_apps/Camera")
        .with_remap("/camera/image", "/usb_cam/image_raw")
}

/// Mobile base capability with a token that matches no launch rule.
#[must_use]
pub fn test_base_capability() -> CapabilityRequirement {
    CapabilityRequirement::new("std_capabilities/DifferentialMobileBase")
        .with_remap("/mobile_base/sensors/bumper", "/kobuki/bumper")
}

/// Capability for which no provider data was supplied.
#[must_use]
pub fn test_unprovided_capability() -> CapabilityRequirement {
    CapabilityRequirement::new("std_capabilities/Diagnostics")
}

/// Client requests: `cmd_vel` to a relative target, `odom` to an absolute
/// one, and a request for a name the interface does not declare.
#[must_use]
pub fn test_remap_requests() -> Vec<RemapRequest> {
    vec![
        RemapRequest::new("cmd_vel", "teleop/cmd_vel"),
        RemapRequest::new("odom", "/shared/odom"),
        RemapRequest::new("scan", "/shared/scan"),
    ]
}
