//! In-memory repository registry.

use super::InMemoryRepository;
use crate::resolver::{
    domain::{RepositoryDescriptor, RepositoryId, RepositoryName},
    ports::{RegistryError, RegistryResult, RepositoryHandle, RepositoryRegistry},
};
use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Failure the in-memory registry reports for every lookup while set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryFault {
    /// Lookups fail with [`RegistryError::Unavailable`].
    Unavailable,
    /// Lookups fail with [`RegistryError::Cancelled`].
    Cancelled,
}

/// Thread-safe in-memory repository registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryRegistry {
    state: Arc<RwLock<InMemoryRegistryState>>,
}

#[derive(Debug, Default)]
struct InMemoryRegistryState {
    entries: HashMap<RepositoryId, RegistryEntry>,
    name_index: HashMap<RepositoryName, RepositoryId>,
    fault: Option<RegistryFault>,
}

#[derive(Debug)]
struct RegistryEntry {
    descriptor: RepositoryDescriptor,
    handle: Arc<InMemoryRepository>,
}

impl InMemoryRegistryState {
    fn check_fault(&self) -> RegistryResult<()> {
        match self.fault {
            None => Ok(()),
            Some(RegistryFault::Cancelled) => Err(RegistryError::Cancelled),
            Some(RegistryFault::Unavailable) => Err(RegistryError::unavailable(
                std::io::Error::other("in-memory registry marked unavailable"),
            )),
        }
    }

    fn entry(&self, id: RepositoryId) -> RegistryResult<&RegistryEntry> {
        self.entries.get(&id).ok_or(RegistryError::IdNotFound(id))
    }
}

impl InMemoryRepositoryRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, InMemoryRegistryState>> {
        self.state
            .read()
            .map_err(|err| RegistryError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, InMemoryRegistryState>> {
        self.state
            .write()
            .map_err(|err| RegistryError::unavailable(std::io::Error::other(err.to_string())))
    }

    /// Registers a new, open repository under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] when the name is taken.
    pub fn create(
        &self,
        name: RepositoryName,
        clock: &impl Clock,
    ) -> RegistryResult<RepositoryDescriptor> {
        let mut state = self.write()?;
        if state.name_index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let descriptor = RepositoryDescriptor::new(name, clock);
        let handle = Arc::new(InMemoryRepository::new(
            descriptor.id(),
            descriptor.name().clone(),
        ));
        state
            .name_index
            .insert(descriptor.name().clone(), descriptor.id());
        state.entries.insert(
            descriptor.id(),
            RegistryEntry {
                descriptor: descriptor.clone(),
                handle,
            },
        );
        Ok(descriptor)
    }

    /// Removes the repository registered under `name`.
    ///
    /// The shared handle is closed so holders observe the removal.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NameNotFound`] when the name is unknown.
    pub fn remove(&self, name: &RepositoryName) -> RegistryResult<RepositoryDescriptor> {
        let mut state = self.write()?;
        let id = state
            .name_index
            .remove(name)
            .ok_or_else(|| RegistryError::NameNotFound(name.clone()))?;
        let entry = state
            .entries
            .remove(&id)
            .ok_or(RegistryError::IdNotFound(id))?;
        entry.handle.close();
        Ok(entry.descriptor)
    }

    /// Closes the shared handle of a repository without unregistering it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdNotFound`] when the identifier is unknown.
    pub fn close(&self, id: RepositoryId) -> RegistryResult<()> {
        self.read()?.entry(id)?.handle.close();
        Ok(())
    }

    /// Reopens the shared handle of a repository.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdNotFound`] when the identifier is unknown.
    pub fn reopen(&self, id: RepositoryId) -> RegistryResult<()> {
        self.read()?.entry(id)?.handle.reopen();
        Ok(())
    }

    /// Sets or clears the fault reported by subsequent lookups and opens.
    ///
    /// # Errors
    ///
    /// Returns registry errors when lock acquisition fails.
    pub fn set_fault(&self, fault: Option<RegistryFault>) -> RegistryResult<()> {
        self.write()?.fault = fault;
        Ok(())
    }

    /// Returns registered names in sorted order.
    ///
    /// # Errors
    ///
    /// Returns registry errors when lock acquisition fails.
    pub fn names(&self) -> RegistryResult<Vec<RepositoryName>> {
        let mut names: Vec<_> = self.read()?.name_index.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl RepositoryRegistry for InMemoryRepositoryRegistry {
    async fn lookup_by_name(&self, name: &RepositoryName) -> RegistryResult<RepositoryDescriptor> {
        let state = self.read()?;
        state.check_fault()?;
        let id = state
            .name_index
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::NameNotFound(name.clone()))?;
        Ok(state.entry(id)?.descriptor.clone())
    }

    async fn open_by_id(&self, id: RepositoryId) -> RegistryResult<Arc<dyn RepositoryHandle>> {
        let state = self.read()?;
        state.check_fault()?;
        let handle: Arc<dyn RepositoryHandle> = state.entry(id)?.handle.clone();
        Ok(handle)
    }
}
