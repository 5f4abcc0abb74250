//! Graph-name helpers and the application namespace.
//!
//! Names are path-like strings separated by `/`. A name with a leading
//! separator is absolute (fully qualified); anything else is relative and
//! resolves underneath the application namespace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveResult};

/// Path separator for graph names.
pub const SEPARATOR: char = '/';

/// Returns `true` if `name` is fully qualified.
#[must_use]
pub fn is_absolute(name: &str) -> bool {
    name.starts_with(SEPARATOR)
}

/// Root a relative name under `namespace`.
///
/// Absolute names are not special-cased here; callers decide whether an
/// absolute name should bypass the namespace.
#[must_use]
pub fn qualify(namespace: &ApplicationNamespace, name: &str) -> String {
    format!("{SEPARATOR}{}{SEPARATOR}{name}", namespace.as_str())
}

/// Check that `name` is a well-formed endpoint name.
///
/// The first character must be alphabetic, `/` or `~`; the rest must be
/// alphanumeric, `_` or `/`. Empty segments and a trailing separator are
/// rejected.
///
/// # Errors
///
/// Returns a short reason describing the first violation found.
pub fn check_name(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("name is empty");
    };
    if !(first.is_ascii_alphabetic() || first == SEPARATOR || first == '~') {
        return Err("name must start with a letter, '/' or '~'");
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == SEPARATOR) {
        return Err("name may only contain letters, digits, '_' and '/'");
    }
    if name.contains("//") {
        return Err("name contains an empty segment");
    }
    if name.len() > 1 && name.ends_with(SEPARATOR) {
        return Err("name ends with a separator");
    }
    if name == "/" {
        return Err("name is the bare root");
    }
    Ok(())
}

/// Unique path prefix under which one running instance's relative names
/// are rooted.
///
/// Stored without leading or trailing separators so that
/// [`qualify`] never produces `//`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationNamespace(String);

impl ApplicationNamespace {
    /// Create a namespace, stripping surrounding separators.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidNamespace`] if nothing remains after
    /// trimming or the remainder is not a valid relative name.
    pub fn new(raw: impl Into<String>) -> ResolveResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Err(ResolveError::InvalidNamespace {
                namespace: raw,
                reason: "namespace is empty".to_string(),
            });
        }
        if !trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(ResolveError::InvalidNamespace {
                namespace: raw,
                reason: "namespace must start with a letter".to_string(),
            });
        }
        if let Err(reason) = check_name(trimmed) {
            return Err(ResolveError::InvalidNamespace {
                namespace: raw,
                reason: reason.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The namespace without surrounding separators.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SEPARATOR}{}", self.0)
    }
}

impl TryFrom<String> for ApplicationNamespace {
    type Error = ResolveError;

    fn try_from(raw: String) -> ResolveResult<Self> {
        Self::new(raw)
    }
}

impl From<ApplicationNamespace> for String {
    fn from(ns: ApplicationNamespace) -> Self {
        ns.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/odom"));
        assert!(is_absolute("/robot1/odom"));
        assert!(!is_absolute("odom"));
        assert!(!is_absolute("teleop/cmd_vel"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn test_qualify() {
        let ns = ApplicationNamespace::new("robot1").unwrap();
        assert_eq!(qualify(&ns, "odom"), "/robot1/odom");
        assert_eq!(qualify(&ns, "teleop/cmd_vel"), "/robot1/teleop/cmd_vel");
    }

    #[test]
    fn test_namespace_strips_separators() {
        let ns = ApplicationNamespace::new("/robot1/").unwrap();
        assert_eq!(ns.as_str(), "robot1");
        assert_eq!(ns.to_string(), "/robot1");
        assert_eq!(qualify(&ns, "odom"), "/robot1/odom");

        let nested = ApplicationNamespace::new("fleet/robot1").unwrap();
        assert_eq!(qualify(&nested, "odom"), "/fleet/robot1/odom");
    }

    #[test]
    fn test_namespace_rejects_empty() {
        assert!(matches!(
            ApplicationNamespace::new("/"),
            Err(ResolveError::InvalidNamespace { .. })
        ));
        assert!(ApplicationNamespace::new("").is_err());
        assert!(ApplicationNamespace::new("1robot").is_err());
        assert!(ApplicationNamespace::new("robot one").is_err());
    }

    #[test]
    fn test_check_name() {
        assert!(check_name("odom").is_ok());
        assert!(check_name("/camera/image_raw").is_ok());
        assert!(check_name("~private").is_ok());
        assert_eq!(check_name(""), Err("name is empty"));
        assert!(check_name("1odom").is_err());
        assert!(check_name("cmd vel").is_err());
        assert!(check_name("/a//b").is_err());
        assert!(check_name("odom/").is_err());
        assert!(check_name("/").is_err());
    }

    #[test]
    fn test_namespace_serde() {
        let ns: ApplicationNamespace = serde_json::from_str("\"/robot1\"").unwrap();
        assert_eq!(ns.as_str(), "robot1");
        assert_eq!(serde_json::to_string(&ns).unwrap(), "\"robot1\"");

        let bad: Result<ApplicationNamespace, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
