//! Port contracts for repository location resolution.

mod handle;
mod registry;
mod resolver;

pub use handle::RepositoryHandle;
pub use registry::{RegistryError, RegistryResult, RepositoryRegistry};
pub use resolver::{RepositoryResolver, ResolverError, ResolverResult};
