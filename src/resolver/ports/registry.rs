//! Registry port: name lookup and open-by-id for managed repositories.

use super::RepositoryHandle;
use crate::resolver::domain::{RepositoryDescriptor, RepositoryId, RepositoryName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Lookup and open contract required from the repository registry.
///
/// The registry owns repository creation, persistence, the name index and
/// handle lifecycle. Both operations may be called concurrently and
/// repeatedly; each must be individually consistent from the caller's point
/// of view.
#[async_trait]
pub trait RepositoryRegistry: Send + Sync {
    /// Resolves a repository name to its descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NameNotFound`] when no repository carries the
    /// name, [`RegistryError::Cancelled`] when the lookup was cancelled, or
    /// [`RegistryError::Unavailable`] on registry failure.
    async fn lookup_by_name(&self, name: &RepositoryName) -> RegistryResult<RepositoryDescriptor>;

    /// Opens the repository with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdNotFound`] when the identifier is unknown,
    /// [`RegistryError::Cancelled`] when opening was cancelled, or
    /// [`RegistryError::Unavailable`] on registry failure.
    async fn open_by_id(&self, id: RepositoryId) -> RegistryResult<Arc<dyn RepositoryHandle>>;
}

/// Errors returned by repository registry implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No repository carries the name.
    #[error("repository not found by name: {0}")]
    NameNotFound(RepositoryName),

    /// No repository carries the identifier.
    #[error("repository not found by id: {0}")]
    IdNotFound(RepositoryId),

    /// A repository with the same name already exists.
    #[error("duplicate repository name: {0}")]
    DuplicateName(RepositoryName),

    /// The registry operation was cancelled before completing.
    #[error("registry operation cancelled")]
    Cancelled,

    /// Registry-side failure (I/O, lock poisoning, backend outage).
    #[error("registry unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wraps a registry-side failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Returns whether the error reports genuine absence rather than a fault.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NameNotFound(_) | Self::IdNotFound(_))
    }
}
