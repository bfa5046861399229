//! Domain model for repository location resolution.
//!
//! The resolver domain models scheme-qualified locations, repository names
//! and identifiers, the registry descriptor linking them, and the operation
//! set a resolver advertises. Registry access stays outside this boundary.

mod config;
mod descriptor;
mod error;
mod ids;
mod location;
mod operation;

pub use config::RepositoryConfig;
pub use descriptor::RepositoryDescriptor;
pub use error::{ParseResolverOperationError, ResolverDomainError};
pub use ids::{RepositoryId, RepositoryName};
pub use location::{GEOSERVER_SCHEME, LocationUri, SCHEME_SEPARATOR, Scheme};
pub use operation::{ResolverCapabilities, ResolverOperation};
