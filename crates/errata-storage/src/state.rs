use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON value. `Ok(None)` when the key is absent.
pub fn load_state<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Load a JSON value, substituting `default()` when it is absent, unreadable
/// or malformed. Never fails.
pub fn load_state_or_else<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    match load_state(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!(key, "no saved state, using default");
            default()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "saved state unusable, using default");
            default()
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_state<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, &body)
}
