//! Process-wide default resolver set for the composition root.
//!
//! Library code receives its registry and resolvers explicitly. Only the
//! host's entry point installs a default set here, once, for code paths
//! that cannot thread a [`ResolverSet`] through.

use super::{ResolverSet, ResolverSetError};
use std::sync::OnceLock;

static DEFAULT_RESOLVERS: OnceLock<ResolverSet> = OnceLock::new();

/// Installs the process-wide default resolver set.
///
/// # Errors
///
/// Returns [`ResolverSetError::DefaultAlreadyInstalled`] when a default set
/// was installed earlier; the earlier set stays in place.
pub fn install_default_resolvers(resolvers: ResolverSet) -> Result<(), ResolverSetError> {
    DEFAULT_RESOLVERS
        .set(resolvers)
        .map_err(|_| ResolverSetError::DefaultAlreadyInstalled)
}

/// Returns the process-wide default resolver set, if installed.
#[must_use]
pub fn default_resolvers() -> Option<&'static ResolverSet> {
    DEFAULT_RESOLVERS.get()
}
