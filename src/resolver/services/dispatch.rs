//! Runtime selection among resolver variants by location scheme.

use crate::resolver::{
    domain::{RepositoryName, ResolverDomainError, Scheme},
    ports::{RepositoryHandle, RepositoryResolver, ResolverResult},
};
use log::debug;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling a resolver set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolverSetError {
    /// Another resolver already owns the scheme.
    #[error("a resolver for scheme '{0}' is already registered")]
    DuplicateScheme(Scheme),

    /// The process-wide default set was installed earlier.
    #[error("default resolver set is already installed")]
    DefaultAlreadyInstalled,
}

/// Ordered collection of resolvers with exclusive scheme ownership.
///
/// Each location is routed to the single resolver whose
/// [`RepositoryResolver::can_handle`] accepts it.
#[derive(Clone, Default)]
pub struct ResolverSet {
    resolvers: Vec<Arc<dyn RepositoryResolver>>,
}

impl ResolverSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverSetError::DuplicateScheme`] when a registered
    /// resolver already owns the same scheme.
    pub fn register(
        &mut self,
        resolver: Arc<dyn RepositoryResolver>,
    ) -> Result<(), ResolverSetError> {
        if self.schemes().any(|scheme| scheme == resolver.scheme()) {
            return Err(ResolverSetError::DuplicateScheme(resolver.scheme().clone()));
        }
        debug!("registered resolver for scheme '{}'", resolver.scheme());
        self.resolvers.push(resolver);
        Ok(())
    }

    /// Adds a resolver, builder style.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverSetError::DuplicateScheme`] when a registered
    /// resolver already owns the same scheme.
    pub fn with_resolver(
        mut self,
        resolver: Arc<dyn RepositoryResolver>,
    ) -> Result<Self, ResolverSetError> {
        self.register(resolver)?;
        Ok(self)
    }

    /// Returns the resolver owning the location's scheme, if any.
    #[must_use]
    pub fn resolver_for(&self, location: &str) -> Option<&Arc<dyn RepositoryResolver>> {
        self.resolvers
            .iter()
            .find(|resolver| resolver.can_handle(location))
    }

    /// Iterates registered schemes in registration order.
    pub fn schemes(&self) -> impl Iterator<Item = &Scheme> + '_ {
        self.resolvers.iter().map(|resolver| resolver.scheme())
    }

    /// Returns the number of registered resolvers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Returns whether no resolver is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    fn require(&self, location: &str) -> ResolverResult<&Arc<dyn RepositoryResolver>> {
        self.resolver_for(location)
            .ok_or_else(|| ResolverDomainError::UnhandledLocation(location.to_owned()).into())
    }

    /// Extracts the repository name through the owning resolver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::resolver::ports::ResolverError::InvalidArgument`]
    /// when no resolver handles the location, and the owning resolver's
    /// errors otherwise.
    pub fn get_name(&self, location: &str) -> ResolverResult<RepositoryName> {
        self.require(location)?.get_name(location)
    }

    /// Probes existence through the owning resolver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::resolver::ports::ResolverError::InvalidArgument`]
    /// when no resolver handles the location, and the owning resolver's
    /// errors otherwise.
    pub async fn repo_exists(&self, location: &str) -> ResolverResult<bool> {
        self.require(location)?.repo_exists(location).await
    }

    /// Opens the location through the owning resolver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::resolver::ports::ResolverError::InvalidArgument`]
    /// when no resolver handles the location, and the owning resolver's
    /// errors otherwise.
    pub async fn open(&self, location: &str) -> ResolverResult<Arc<dyn RepositoryHandle>> {
        self.require(location)?.open(location).await
    }
}

impl fmt::Debug for ResolverSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ResolverSet")
            .field("schemes", &self.schemes().collect::<Vec<_>>())
            .finish()
    }
}
