//! Input validation run before resolution.
//!
//! Rejects empty or malformed names in the client-facing inputs so the
//! resolution passes can assume well-formed graph names.

use crate::endpoint::PublicInterface;
use crate::error::{ResolveError, ResolveResult};
use crate::names::check_name;
use crate::request::RemapRequest;

/// Validate every declared public interface name.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidName`] for the first malformed name, with
/// `field` set to e.g. `publishers[2]`.
pub fn validate_public_interface(interface: &PublicInterface) -> ResolveResult<()> {
    for kind in crate::EndpointKind::ALL {
        for (idx, name) in interface.names(kind).iter().enumerate() {
            check(&format!("{}[{idx}]", kind.key()), name)?;
        }
    }
    Ok(())
}

/// Validate the source and target of every remap request.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidName`] for the first malformed name, with
/// `field` set to e.g. `remappings[0].to`.
pub fn validate_remap_requests(requests: &[RemapRequest]) -> ResolveResult<()> {
    for (idx, request) in requests.iter().enumerate() {
        check(&format!("remappings[{idx}].from"), &request.from)?;
        check(&format!("remappings[{idx}].to"), &request.to)?;
    }
    Ok(())
}

fn check(field: &str, name: &str) -> ResolveResult<()> {
    check_name(name).map_err(|reason| ResolveError::InvalidName {
        field: field.to_owned(),
        name: name.to_owned(),
        reason: reason.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EndpointKind;

    #[test]
    fn test_valid_interface_passes() {
        let interface = PublicInterface::new()
            .with(EndpointKind::Publisher, "odom")
            .with(EndpointKind::Service, "/map_server/get_map");
        assert!(validate_public_interface(&interface).is_ok());
    }

    #[test]
    fn test_empty_interface_name_rejected() {
        let interface = PublicInterface::new()
            .with(EndpointKind::Publisher, "odom")
            .with(EndpointKind::Publisher, "");

        let err = validate_public_interface(&interface).unwrap_err();
        match err {
            ResolveError::InvalidName { field, name, .. } => {
                assert_eq!(field, "publishers[1]");
                assert!(name.is_empty());
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_request_target_rejected() {
        let requests = vec![
            RemapRequest::new("cmd_vel", "teleop/cmd_vel"),
            RemapRequest::new("odom", "bad name"),
        ];

        let err = validate_remap_requests(&requests).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidName { ref field, .. } if field == "remappings[1].to"
        ));
        assert!(!err.is_precondition_violation());
    }
}
