//! Registry-owned repository descriptor.

use super::{RepositoryId, RepositoryName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registry entry pairing the external name with the internal identifier.
///
/// Resolution is a two-hop lookup: the name carried in a location selects a
/// descriptor, and the descriptor's identifier selects the live handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    id: RepositoryId,
    name: RepositoryName,
    created_at: DateTime<Utc>,
}

impl RepositoryDescriptor {
    /// Creates a descriptor with a fresh identifier.
    #[must_use]
    pub fn new(name: RepositoryName, clock: &impl Clock) -> Self {
        Self {
            id: RepositoryId::new(),
            name,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a descriptor from stored parts.
    #[must_use]
    pub const fn from_parts(
        id: RepositoryId,
        name: RepositoryName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    /// Returns the registry-internal identifier.
    #[must_use]
    pub const fn id(&self) -> RepositoryId {
        self.id
    }

    /// Returns the external-facing name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
