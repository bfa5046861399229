//! Resolver operations and capability sets.

use super::ParseResolverOperationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Operation exposed by a repository resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverOperation {
    /// Scheme ownership check.
    CanHandle,
    /// Payload extraction.
    GetName,
    /// Resolution to a live repository handle.
    Open,
    /// Existence probe.
    RepoExists,
    /// Repository creation at a location.
    Initialize,
    /// Access to the repository configuration database.
    ConfigDatabase,
    /// Repository removal.
    Delete,
    /// Construction of a child location under a root location.
    BuildRepoUri,
    /// Enumeration of repositories under a root location.
    ListRepoNames,
}

impl ResolverOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::CanHandle,
        Self::GetName,
        Self::Open,
        Self::RepoExists,
        Self::Initialize,
        Self::ConfigDatabase,
        Self::Delete,
        Self::BuildRepoUri,
        Self::ListRepoNames,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CanHandle => "can_handle",
            Self::GetName => "get_name",
            Self::Open => "open",
            Self::RepoExists => "repo_exists",
            Self::Initialize => "initialize",
            Self::ConfigDatabase => "config_database",
            Self::Delete => "delete",
            Self::BuildRepoUri => "build_repo_uri",
            Self::ListRepoNames => "list_repo_names",
        }
    }
}

impl fmt::Display for ResolverOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResolverOperation {
    type Error = ParseResolverOperationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == normalized)
            .ok_or_else(|| ParseResolverOperationError(value.to_owned()))
    }
}

/// Set of operations a resolver variant actually supports.
///
/// Callers can consult the set instead of invoking an operation and
/// inspecting the failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolverCapabilities(BTreeSet<ResolverOperation>);

impl ResolverCapabilities {
    /// Capabilities of a resolver that can only locate and open repositories.
    #[must_use]
    pub fn read_only() -> Self {
        [
            ResolverOperation::CanHandle,
            ResolverOperation::GetName,
            ResolverOperation::Open,
            ResolverOperation::RepoExists,
        ]
        .into_iter()
        .collect()
    }

    /// Returns whether `operation` is supported.
    #[must_use]
    pub fn supports(&self, operation: ResolverOperation) -> bool {
        self.0.contains(&operation)
    }

    /// Iterates operations this resolver rejects as unsupported.
    pub fn unsupported(&self) -> impl Iterator<Item = ResolverOperation> + '_ {
        ResolverOperation::ALL
            .into_iter()
            .filter(|operation| !self.supports(*operation))
    }
}

impl FromIterator<ResolverOperation> for ResolverCapabilities {
    fn from_iter<I: IntoIterator<Item = ResolverOperation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
