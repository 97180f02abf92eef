//! Persisted user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` abstracts the key-value surface (browser `localStorage` or an
//! in-memory map); `preferences` layers typed accessors and defaults on top so
//! controllers never parse raw strings themselves.

pub mod preferences;
pub mod store;

pub use preferences::Preferences;
pub use store::{MemoryStore, PreferenceStore, StoreError};
