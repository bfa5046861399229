//! In-memory registry adapter for tests and local composition.

mod handle;
mod registry;

pub use handle::InMemoryRepository;
pub use registry::{InMemoryRepositoryRegistry, RegistryFault};
