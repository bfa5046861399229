//! Resolver port: one implementation per location scheme.

use super::{RegistryError, RepositoryHandle};
use crate::resolver::domain::{
    LocationUri, RepositoryConfig, RepositoryId, RepositoryName, ResolverCapabilities,
    ResolverDomainError, ResolverOperation, Scheme,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Translates scheme-qualified locations into live repository handles.
///
/// Each implementation owns exactly one [`Scheme`]. Lifecycle operations
/// default to [`ResolverError::Unsupported`]; variants that support them
/// override the defaults and list them in [`Self::capabilities`].
#[async_trait]
pub trait RepositoryResolver: Send + Sync {
    /// Returns the scheme this resolver owns.
    fn scheme(&self) -> &Scheme;

    /// Returns the operations this resolver supports.
    fn capabilities(&self) -> ResolverCapabilities;

    /// Returns whether this resolver owns the location's scheme.
    ///
    /// Never fails; empty and malformed input yields `false`.
    fn can_handle(&self, location: &str) -> bool {
        self.scheme().owns(location)
    }

    /// Extracts the repository name or id carried by the location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidArgument`] when the location is not
    /// handled by this resolver or carries no name.
    fn get_name(&self, location: &str) -> ResolverResult<RepositoryName>;

    /// Reports whether the location resolves to an existing repository.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidArgument`] for unparseable locations.
    /// Resolution failures are reported as `Ok(false)`.
    async fn repo_exists(&self, location: &str) -> ResolverResult<bool>;

    /// Resolves the location to an open repository handle.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidArgument`] for unparseable locations,
    /// [`ResolverError::Connection`] when the repository cannot be found or
    /// opened, [`ResolverError::Cancelled`] when resolution was cancelled,
    /// and [`ResolverError::ClosedHandle`] when the backing registry breaks
    /// its contract.
    async fn open(&self, location: &str) -> ResolverResult<Arc<dyn RepositoryHandle>>;

    /// Creates a repository at the location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Unsupported`] unless overridden.
    async fn initialize(&self, _location: &str) -> ResolverResult<()> {
        Err(self.unsupported(ResolverOperation::Initialize))
    }

    /// Returns the configuration database for a repository or root location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Unsupported`] unless overridden.
    async fn config_database(
        &self,
        _location: &str,
        _root: bool,
    ) -> ResolverResult<RepositoryConfig> {
        Err(self.unsupported(ResolverOperation::ConfigDatabase))
    }

    /// Deletes the repository at the location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Unsupported`] unless overridden.
    async fn delete(&self, _location: &str) -> ResolverResult<bool> {
        Err(self.unsupported(ResolverOperation::Delete))
    }

    /// Builds the location of `name` beneath a root location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Unsupported`] unless overridden.
    fn build_repo_uri(&self, _root: &str, _name: &RepositoryName) -> ResolverResult<LocationUri> {
        Err(self.unsupported(ResolverOperation::BuildRepoUri))
    }

    /// Lists repository names beneath a root location.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Unsupported`] unless overridden.
    async fn list_repo_names_under_root(&self, _root: &str) -> ResolverResult<Vec<RepositoryName>> {
        Err(self.unsupported(ResolverOperation::ListRepoNames))
    }

    /// Builds the error reported for an unsupported operation.
    fn unsupported(&self, operation: ResolverOperation) -> ResolverError {
        ResolverError::Unsupported {
            scheme: self.scheme().clone(),
            operation,
        }
    }
}

/// Errors returned by repository resolvers.
#[derive(Debug, Clone, Error)]
pub enum ResolverError {
    /// The location cannot be interpreted by the resolver.
    #[error(transparent)]
    InvalidArgument(#[from] ResolverDomainError),

    /// The name could not be resolved to an existing, openable repository.
    #[error("no repository found with name or id '{name}'")]
    Connection {
        /// Name or id carried by the location.
        name: RepositoryName,
        /// Registry-side cause.
        #[source]
        source: RegistryError,
    },

    /// The registry returned a handle that is not open.
    ///
    /// This signals an internally inconsistent registry, not a missing
    /// repository.
    #[error("registry returned a closed repository for '{name}' ({id})")]
    ClosedHandle {
        /// Name or id carried by the location.
        name: RepositoryName,
        /// Identifier of the closed repository.
        id: RepositoryId,
    },

    /// The registry cancelled resolution.
    #[error("resolution of repository '{name}' was cancelled")]
    Cancelled {
        /// Name or id carried by the location.
        name: RepositoryName,
    },

    /// The resolver variant does not implement the operation.
    #[error("{operation} is not supported by the '{scheme}' resolver")]
    Unsupported {
        /// Scheme of the rejecting resolver.
        scheme: Scheme,
        /// Rejected operation.
        operation: ResolverOperation,
    },
}
