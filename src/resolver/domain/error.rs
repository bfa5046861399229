//! Error types for location parsing and repository name validation.

use super::Scheme;
use thiserror::Error;

/// Errors returned while constructing resolver domain values.
///
/// Every variant is a caller-side mistake: the location or name handed to
/// the resolver cannot be interpreted, so retrying with the same input is
/// pointless.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolverDomainError {
    /// The scheme token is empty or violates RFC 3986 scheme grammar.
    #[error("invalid location scheme '{0}'")]
    InvalidScheme(String),

    /// The location does not carry the scheme owned by the resolver.
    #[error("not a {expected} repository location: '{location}'")]
    SchemeMismatch {
        /// Scheme the resolver owns.
        expected: Scheme,
        /// Location as supplied by the caller.
        location: String,
    },

    /// The scheme matches but the `://` separator is absent.
    #[error("repository location '{0}' is missing the '://' separator")]
    MissingSeparator(String),

    /// Nothing but whitespace follows the `scheme://` prefix.
    #[error("no repository name or id specified in '{0}'")]
    EmptyPayload(String),

    /// The repository name is empty or whitespace only.
    #[error("repository name must not be empty")]
    EmptyRepositoryName,

    /// No registered resolver claims the location.
    #[error("no resolver can handle repository location '{0}'")]
    UnhandledLocation(String),
}

/// Error returned while parsing a resolver operation name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown resolver operation: {0}")]
pub struct ParseResolverOperationError(pub String);
