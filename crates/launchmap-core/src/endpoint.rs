//! Endpoint categories and per-category name listings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a communication endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// Topic publisher.
    Publisher,
    /// Topic subscriber.
    Subscriber,
    /// Service server.
    Service,
    /// Action client.
    ActionClient,
    /// Action server.
    ActionServer,
}

impl EndpointKind {
    /// Every category, in resolution order.
    pub const ALL: [Self; 5] = [
        Self::Publisher,
        Self::Subscriber,
        Self::Service,
        Self::ActionClient,
        Self::ActionServer,
    ];

    /// Key used for this category in manifests and listings.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Publisher => "publishers",
            Self::Subscriber => "subscribers",
            Self::Service => "services",
            Self::ActionClient => "action_clients",
            Self::ActionServer => "action_servers",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Publisher => write!(f, "publisher"),
            Self::Subscriber => write!(f, "subscriber"),
            Self::Service => write!(f, "service"),
            Self::ActionClient => write!(f, "action client"),
            Self::ActionServer => write!(f, "action server"),
        }
    }
}

/// Ordered endpoint names, grouped by category.
///
/// Serialized with the manifest keys (`publishers`, `subscribers`, ...);
/// absent keys deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointListing {
    /// Publisher names.
    pub publishers: Vec<String>,
    /// Subscriber names.
    pub subscribers: Vec<String>,
    /// Service names.
    pub services: Vec<String>,
    /// Action client names.
    pub action_clients: Vec<String>,
    /// Action server names.
    pub action_servers: Vec<String>,
}

/// The interface an application declares for itself.
pub type PublicInterface = EndpointListing;

/// Final absolute names published for external exposure.
pub type ResolvedInterface = EndpointListing;

impl EndpointListing {
    /// Create an empty listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name under `kind` (builder form).
    #[must_use]
    pub fn with(mut self, kind: EndpointKind, name: impl Into<String>) -> Self {
        self.push(kind, name);
        self
    }

    /// Append a name under `kind`.
    pub fn push(&mut self, kind: EndpointKind, name: impl Into<String>) {
        self.names_mut(kind).push(name.into());
    }

    /// Names declared under `kind`, in declaration order.
    #[must_use]
    pub fn names(&self, kind: EndpointKind) -> &[String] {
        match kind {
            EndpointKind::Publisher => &self.publishers,
            EndpointKind::Subscriber => &self.subscribers,
            EndpointKind::Service => &self.services,
            EndpointKind::ActionClient => &self.action_clients,
            EndpointKind::ActionServer => &self.action_servers,
        }
    }

    fn names_mut(&mut self, kind: EndpointKind) -> &mut Vec<String> {
        match kind {
            EndpointKind::Publisher => &mut self.publishers,
            EndpointKind::Subscriber => &mut self.subscribers,
            EndpointKind::Service => &mut self.services,
            EndpointKind::ActionClient => &mut self.action_clients,
            EndpointKind::ActionServer => &mut self.action_servers,
        }
    }

    /// Iterate every `(kind, name)` pair, categories in [`EndpointKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (EndpointKind, &str)> + '_ {
        EndpointKind::ALL
            .into_iter()
            .flat_map(move |kind| self.names(kind).iter().map(move |n| (kind, n.as_str())))
    }

    /// Total number of names across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        EndpointKind::ALL
            .into_iter()
            .map(|kind| self.names(kind).len())
            .sum()
    }

    /// Whether every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        EndpointKind::ALL
            .into_iter()
            .all(|kind| self.names(kind).is_empty())
    }
}
