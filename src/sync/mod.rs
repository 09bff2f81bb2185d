// src/sync/mod.rs

use core::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::collections::Dictionary;
use crate::config::DictionaryConfig;
use crate::error::Result;

/// A cloneable handle to one `Dictionary` guarded by a single reader/writer
/// lock. Every operation holds the lock for its whole scan, so the key and
/// value vectors are never seen out of step.
pub struct SharedDictionary<K, V> {
    inner: Arc<RwLock<Dictionary<K, V>>>,
}

impl<K, V> Clone for SharedDictionary<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<Dictionary<K, V>> for SharedDictionary<K, V> {
    fn from(dict: Dictionary<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dict)),
        }
    }
}

impl<K, V> SharedDictionary<K, V> {
    pub fn new() -> Self {
        Dictionary::new().into()
    }

    pub fn with_config(config: &DictionaryConfig) -> Self {
        Dictionary::with_config(config).into()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Dictionary<K, V>> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Dictionary<K, V>> {
        self.inner.write()
    }

    pub fn size(&self) -> usize {
        self.read().size()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<K: PartialEq + fmt::Debug, V> SharedDictionary<K, V> {
    pub fn insert(&self, key: K, value: V) -> Result<()> {
        self.write().insert(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.write().remove(key)
    }

    pub fn update(&self, key: &K, value: V) -> bool {
        self.write().update(key, value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    /// Clones the value out so no lock outlives the call.
    pub fn lookup(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.read().lookup(key).cloned()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SharedDictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDictionary")
            .field("inner", &*self.read())
            .finish()
    }
}
