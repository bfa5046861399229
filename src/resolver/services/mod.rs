//! Resolver implementations and scheme-based dispatch.

mod config;
mod defaults;
mod dispatch;
mod managed;

pub use config::ManagedResolverConfig;
pub use defaults::{default_resolvers, install_default_resolvers};
pub use dispatch::{ResolverSet, ResolverSetError};
pub use managed::ManagedRepositoryResolver;
