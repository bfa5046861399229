//! Integration tests for [`ResolverSet`] dispatch.

use std::sync::Arc;

use crate::in_memory::helpers::repository_name;
use mockable::DefaultClock;
use repolocator::resolver::{
    adapters::memory::InMemoryRepositoryRegistry,
    domain::{ResolverDomainError, ResolverOperation, Scheme},
    ports::{RepositoryHandle, RepositoryResolver, ResolverError},
    services::{ManagedRepositoryResolver, ManagedResolverConfig, ResolverSet, ResolverSetError},
};
use rstest::rstest;

fn resolver_over(
    registry: &Arc<InMemoryRepositoryRegistry>,
    scheme: &str,
) -> Arc<ManagedRepositoryResolver<InMemoryRepositoryRegistry>> {
    Arc::new(ManagedRepositoryResolver::with_config(
        registry.clone(),
        ManagedResolverConfig::with_scheme(Scheme::new(scheme).expect("valid scheme")),
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_scheme_resolves_through_its_own_registry() {
    let primary = Arc::new(InMemoryRepositoryRegistry::new());
    let archive = Arc::new(InMemoryRepositoryRegistry::new());
    let in_primary = primary
        .create(repository_name("roads"), &DefaultClock)
        .expect("creation should succeed");
    let in_archive = archive
        .create(repository_name("roads"), &DefaultClock)
        .expect("creation should succeed");

    let resolvers = ResolverSet::new()
        .with_resolver(resolver_over(&primary, "geoserver"))
        .and_then(|set| set.with_resolver(resolver_over(&archive, "archive")))
        .expect("distinct schemes should register");

    let from_primary = resolvers
        .open("geoserver://roads")
        .await
        .expect("primary open should succeed");
    let from_archive = resolvers
        .open("archive://roads")
        .await
        .expect("archive open should succeed");

    assert_eq!(from_primary.id(), in_primary.id());
    assert_eq!(from_archive.id(), in_archive.id());
    assert_ne!(from_primary.id(), from_archive.id());
}

#[rstest]
fn scheme_ownership_is_exclusive() {
    let registry = Arc::new(InMemoryRepositoryRegistry::new());
    let mut resolvers = ResolverSet::new();
    resolvers
        .register(resolver_over(&registry, "geoserver"))
        .expect("first registration should succeed");

    let duplicate = resolvers.register(resolver_over(&registry, "geoserver"));
    let other_case = resolvers.register(resolver_over(&registry, "GeoServer"));

    assert_eq!(
        duplicate,
        Err(ResolverSetError::DuplicateScheme(Scheme::geoserver()))
    );
    assert!(other_case.is_ok());
    assert_eq!(resolvers.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_set_handles_nothing() {
    let resolvers = ResolverSet::new();

    assert!(resolvers.is_empty());
    assert!(matches!(
        resolvers.repo_exists("geoserver://roads").await,
        Err(ResolverError::InvalidArgument(
            ResolverDomainError::UnhandledLocation(_)
        ))
    ));
}

#[rstest]
fn capabilities_are_queryable_before_calling() {
    let registry = Arc::new(InMemoryRepositoryRegistry::new());
    let resolvers = ResolverSet::new()
        .with_resolver(resolver_over(&registry, "geoserver"))
        .expect("registration should succeed");

    let resolver = resolvers
        .resolver_for("geoserver://roads")
        .expect("resolver should be selected");
    let capabilities = resolver.capabilities();

    assert!(capabilities.supports(ResolverOperation::Open));
    assert!(capabilities.supports(ResolverOperation::RepoExists));
    assert!(!capabilities.supports(ResolverOperation::Delete));
    assert!(!capabilities.supports(ResolverOperation::ListRepoNames));
}
