use std::cell::Cell;

use errata_storage::{KeyValueStore, MemoryStore, StorageError};

/// Reads like a normal store but refuses every write.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
    pub rejected: Cell<usize>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.rejected.set(self.rejected.get() + 1);
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}
