//! Live repository handle handed out by the registry.

use crate::resolver::domain::{RepositoryId, RepositoryName};
use std::fmt;

/// Reference to an opened repository.
///
/// Handles are owned by the registry; resolvers pass them through without
/// caching them or managing their lifecycle.
pub trait RepositoryHandle: Send + Sync + fmt::Debug {
    /// Returns the registry-internal identifier.
    fn id(&self) -> RepositoryId;

    /// Returns the external-facing name.
    fn name(&self) -> &RepositoryName;

    /// Reports whether the repository is open and usable.
    fn is_open(&self) -> bool;
}
