//! Resolver for repositories managed by an injected registry.

use super::ManagedResolverConfig;
use crate::resolver::{
    domain::{LocationUri, RepositoryName, ResolverCapabilities, Scheme},
    ports::{
        RegistryError, RepositoryHandle, RepositoryRegistry, RepositoryResolver, ResolverError,
        ResolverResult,
    },
};
use async_trait::async_trait;
use log::{debug, error, warn};
use std::sync::Arc;

/// Read/open front-end over a repository registry.
///
/// Locations take the form `<scheme>://<name>`, where the scheme defaults to
/// `geoserver`. The resolver holds no mutable state: every call re-resolves
/// through the registry and handles are never cached. Repository lifecycle
/// operations are owned by the registry and reported as unsupported.
pub struct ManagedRepositoryResolver<R>
where
    R: RepositoryRegistry + ?Sized,
{
    registry: Arc<R>,
    config: ManagedResolverConfig,
}

impl<R> ManagedRepositoryResolver<R>
where
    R: RepositoryRegistry + ?Sized,
{
    /// Creates a resolver owning the default `geoserver` scheme.
    #[must_use]
    pub fn new(registry: Arc<R>) -> Self {
        Self::with_config(registry, ManagedResolverConfig::default())
    }

    /// Creates a resolver with explicit configuration.
    #[must_use]
    pub const fn with_config(registry: Arc<R>, config: ManagedResolverConfig) -> Self {
        Self { registry, config }
    }

    /// Returns the resolver configuration.
    #[must_use]
    pub const fn config(&self) -> &ManagedResolverConfig {
        &self.config
    }

    /// Builds the location under which `name` is resolvable.
    #[must_use]
    pub fn uri_for(&self, name: &RepositoryName) -> LocationUri {
        LocationUri::for_repository(self.config.scheme.clone(), name.clone())
    }

    /// Formats the location for a raw payload under the configured scheme.
    ///
    /// Plain concatenation: the payload is not validated.
    #[must_use]
    pub fn build_uri(&self, payload: &str) -> String {
        self.config.scheme.uri_for(payload)
    }

    fn log_probe_failure(&self, name: &RepositoryName, err: &RegistryError) {
        if err.is_not_found() {
            debug!("repository '{name}' does not exist: {err}");
        } else if self.config.warn_on_transient_failures {
            warn!("existence probe for repository '{name}' failed, reporting absent: {err}");
        } else {
            debug!("existence probe for repository '{name}' failed, reporting absent: {err}");
        }
    }
}

fn resolution_error(name: &RepositoryName, source: RegistryError) -> ResolverError {
    match source {
        RegistryError::Cancelled => ResolverError::Cancelled { name: name.clone() },
        other => ResolverError::Connection {
            name: name.clone(),
            source: other,
        },
    }
}

#[async_trait]
impl<R> RepositoryResolver for ManagedRepositoryResolver<R>
where
    R: RepositoryRegistry + ?Sized,
{
    fn scheme(&self) -> &Scheme {
        &self.config.scheme
    }

    fn capabilities(&self) -> ResolverCapabilities {
        ResolverCapabilities::read_only()
    }

    fn get_name(&self, location: &str) -> ResolverResult<RepositoryName> {
        let payload = self.config.scheme.payload_of(location)?;
        Ok(RepositoryName::new(payload)?)
    }

    async fn repo_exists(&self, location: &str) -> ResolverResult<bool> {
        let name = self.get_name(location)?;
        match self.registry.lookup_by_name(&name).await {
            Ok(descriptor) => {
                debug!("repository '{name}' exists as {}", descriptor.id());
                Ok(true)
            }
            Err(err) => {
                self.log_probe_failure(&name, &err);
                Ok(false)
            }
        }
    }

    async fn open(&self, location: &str) -> ResolverResult<Arc<dyn RepositoryHandle>> {
        let name = self.get_name(location)?;
        debug!("resolving repository '{name}' through the registry");

        let descriptor = self
            .registry
            .lookup_by_name(&name)
            .await
            .map_err(|err| resolution_error(&name, err))?;
        let handle = self
            .registry
            .open_by_id(descriptor.id())
            .await
            .map_err(|err| resolution_error(&name, err))?;

        if !handle.is_open() {
            error!(
                "registry returned a closed repository for '{name}' ({})",
                descriptor.id()
            );
            return Err(ResolverError::ClosedHandle {
                name,
                id: descriptor.id(),
            });
        }

        debug!("opened repository '{name}' ({})", descriptor.id());
        Ok(handle)
    }
}
