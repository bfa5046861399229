//! Integration tests for [`ManagedRepositoryResolver`] over the in-memory
//! registry.

use std::sync::Arc;

use crate::in_memory::helpers::{ResolverContext, context, repository_name};
use repolocator::resolver::{
    adapters::memory::RegistryFault,
    domain::{ResolverDomainError, ResolverOperation},
    ports::{RegistryError, RepositoryHandle, RepositoryResolver, ResolverError},
    services::ManagedRepositoryResolver,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_and_probe_registered_repository(context: ResolverContext) {
    let created = context.create("roads");

    let handle = context
        .resolver
        .open("geoserver://roads")
        .await
        .expect("open should succeed");
    let exists = context
        .resolver
        .repo_exists("geoserver://roads")
        .await
        .expect("probe should succeed");

    assert_eq!(handle.id(), created.id());
    assert!(handle.is_open());
    assert!(exists);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_repository_fails_open_but_probes_false(context: ResolverContext) {
    let open_result = context.resolver.open("geoserver://missing").await;
    let exists = context
        .resolver
        .repo_exists("geoserver://missing")
        .await
        .expect("probe should not propagate registry errors");

    assert!(matches!(
        open_result,
        Err(ResolverError::Connection {
            source: RegistryError::NameNotFound(_),
            ..
        })
    ));
    assert!(!exists);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn payload_with_slashes_names_the_repository(context: ResolverContext) {
    let created = context.create("team/roads");

    let handle = context
        .resolver
        .open("geoserver://team/roads")
        .await
        .expect("open should succeed");

    assert_eq!(handle.id(), created.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_opens_observe_registry_changes(context: ResolverContext) {
    context.create("roads");

    let first = context
        .resolver
        .open("geoserver://roads")
        .await
        .expect("first open should succeed");
    let second = context
        .resolver
        .open("geoserver://roads")
        .await
        .expect("second open should succeed");
    assert_eq!(first.id(), second.id());

    context
        .registry
        .remove(&repository_name("roads"))
        .expect("removal should succeed");

    let after_removal = context.resolver.open("geoserver://roads").await;
    assert!(matches!(
        after_removal,
        Err(ResolverError::Connection { .. })
    ));
    assert!(!first.is_open());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_registered_name_resolves_through_its_built_location(context: ResolverContext) {
    for value in ["roads", "team/rivers", " padded "] {
        context.create(value);
    }

    let names = context.registry.names().expect("listing should succeed");
    assert_eq!(names.len(), 3);

    for name in names {
        let location = context.resolver.build_uri(name.as_str());
        assert!(
            context
                .resolver
                .repo_exists(&location)
                .await
                .expect("existence check should succeed")
        );
        let handle = context
            .resolver
            .open(&location)
            .await
            .expect("open should succeed");
        assert_eq!(handle.name(), &name);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_repository_is_not_handed_out(context: ResolverContext) {
    let created = context.create("roads");
    context
        .registry
        .close(created.id())
        .expect("close should succeed");

    let closed = context.resolver.open("geoserver://roads").await;
    assert!(matches!(closed, Err(ResolverError::ClosedHandle { .. })));

    context
        .registry
        .reopen(created.id())
        .expect("reopen should succeed");
    let reopened = context
        .resolver
        .open("geoserver://roads")
        .await
        .expect("open should succeed after reopen");
    assert!(reopened.is_open());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registry_faults_are_distinguished_by_open_and_hidden_by_probe(
    context: ResolverContext,
) {
    context.create("roads");

    context
        .registry
        .set_fault(Some(RegistryFault::Unavailable))
        .expect("fault injection should succeed");
    let unavailable = context.resolver.open("geoserver://roads").await;
    assert!(matches!(
        unavailable,
        Err(ResolverError::Connection {
            source: RegistryError::Unavailable(_),
            ..
        })
    ));
    assert!(
        !context
            .resolver
            .repo_exists("geoserver://roads")
            .await
            .expect("probe should succeed")
    );

    context
        .registry
        .set_fault(Some(RegistryFault::Cancelled))
        .expect("fault injection should succeed");
    let cancelled = context.resolver.open("geoserver://roads").await;
    assert!(matches!(cancelled, Err(ResolverError::Cancelled { .. })));

    context
        .registry
        .set_fault(None)
        .expect("fault reset should succeed");
    assert!(
        context
            .resolver
            .repo_exists("geoserver://roads")
            .await
            .expect("probe should succeed")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_payload_is_an_invalid_argument(context: ResolverContext) {
    let result = context.resolver.open("geoserver://").await;

    assert!(matches!(
        result,
        Err(ResolverError::InvalidArgument(
            ResolverDomainError::EmptyPayload(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unsupported_operations_reject_valid_input(context: ResolverContext) {
    context.create("roads");

    let delete = context.resolver.delete("geoserver://roads").await;
    let initialize = context.resolver.initialize("geoserver://roads").await;

    assert!(matches!(
        delete,
        Err(ResolverError::Unsupported {
            operation: ResolverOperation::Delete,
            ..
        })
    ));
    assert!(matches!(
        initialize,
        Err(ResolverError::Unsupported {
            operation: ResolverOperation::Initialize,
            ..
        })
    ));
    assert!(
        context
            .resolver
            .repo_exists("geoserver://roads")
            .await
            .expect("probe should succeed"),
        "unsupported operations must not touch the registry"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_opens_share_one_resolver(context: ResolverContext) {
    let created = context.create("roads");
    let resolver = Arc::new(context.resolver);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let shared: Arc<ManagedRepositoryResolver<_>> = Arc::clone(&resolver);
            tokio::spawn(async move { shared.open("geoserver://roads").await })
        })
        .collect();

    for task in tasks {
        let handle = task
            .await
            .expect("task should not panic")
            .expect("open should succeed");
        assert_eq!(handle.id(), created.id());
    }
}
