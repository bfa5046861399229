//! In-memory repository handle.

use crate::resolver::{
    domain::{RepositoryId, RepositoryName},
    ports::RepositoryHandle,
};
use std::sync::atomic::{AtomicBool, Ordering};

/// Repository handle shared by the in-memory registry.
///
/// One instance exists per registered repository, so every open of the same
/// repository observes the same open/closed state.
#[derive(Debug)]
pub struct InMemoryRepository {
    id: RepositoryId,
    name: RepositoryName,
    open: AtomicBool,
}

impl InMemoryRepository {
    /// Creates an open handle.
    #[must_use]
    pub const fn new(id: RepositoryId, name: RepositoryName) -> Self {
        Self {
            id,
            name,
            open: AtomicBool::new(true),
        }
    }

    /// Marks the repository closed.
    pub fn close(&self) {
        self.open.store(false, Ordering::Release);
    }

    /// Marks the repository open again.
    pub fn reopen(&self) {
        self.open.store(true, Ordering::Release);
    }
}

impl RepositoryHandle for InMemoryRepository {
    fn id(&self) -> RepositoryId {
        self.id
    }

    fn name(&self) -> &RepositoryName {
        &self.name
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}
