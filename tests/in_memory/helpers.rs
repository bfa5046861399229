//! Shared test helpers for in-memory resolver integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use repolocator::resolver::{
    adapters::memory::InMemoryRepositoryRegistry,
    domain::{RepositoryDescriptor, RepositoryName},
    services::ManagedRepositoryResolver,
};
use rstest::fixture;

/// Resolver wired to a registry the test can still manipulate.
pub struct ResolverContext {
    /// Registry backing the resolver.
    pub registry: Arc<InMemoryRepositoryRegistry>,
    /// Default-scheme resolver under test.
    pub resolver: ManagedRepositoryResolver<InMemoryRepositoryRegistry>,
}

impl ResolverContext {
    /// Registers a repository and returns its descriptor.
    pub fn create(&self, value: &str) -> RepositoryDescriptor {
        self.registry
            .create(repository_name(value), &DefaultClock)
            .expect("repository creation should succeed")
    }
}

/// Builds a validated repository name.
pub fn repository_name(value: &str) -> RepositoryName {
    RepositoryName::new(value).expect("valid repository name")
}

/// Provides a default-scheme resolver over a fresh in-memory registry.
#[fixture]
pub fn context() -> ResolverContext {
    let registry = Arc::new(InMemoryRepositoryRegistry::new());
    let resolver = ManagedRepositoryResolver::new(registry.clone());
    ResolverContext { registry, resolver }
}
