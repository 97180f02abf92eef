//! Key-value persistence backing user preferences.
//!
//! Browser (`csr`): `LocalStore` reads and writes `window.localStorage`.
//! Headless and tests: `MemoryStore` keeps values in a map for the lifetime
//! of the value.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value surface that survives page reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage is missing or refuses
    /// the write (for example when the quota is exhausted).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries, as if left by a previous visit.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<HashMap<_, _>>();
        Self { values: RefCell::new(values) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` backed store.
#[cfg(feature = "csr")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl LocalStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` outside a browser window or when
    /// storage access is denied (private mode, sandboxed frames).
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StoreError::Unavailable),
        }
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }
}
