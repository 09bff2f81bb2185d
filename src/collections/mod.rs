// src/collections/mod.rs

use core::fmt;
use std::iter::Zip;
use std::{slice, vec};

use log::{debug, trace};

use crate::config::{DictionaryConfig, DEFAULT_CAPACITY, MAX_CAPACITY_HINT};
use crate::error::{DictionaryError, Result};

mod serde_impl;

/// The abstract dictionary contract: unique keys mapped to values.
///
/// Absence is never an error here. `remove` and `lookup` answer `None` and
/// `update` answers `false` when the key is missing; only inserting a key that
/// is already present fails.
pub trait DictionaryAdt<K, V> {
    /// Adds a new pair. Fails with `DictionaryError::DuplicateKey` and leaves
    /// the dictionary untouched if `key` is already present.
    fn insert(&mut self, key: K, value: V) -> Result<()>;

    /// Removes the pair for `key`, handing back its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Replaces the value stored for `key`. Returns whether the key existed.
    fn update(&mut self, key: &K, value: V) -> bool;

    fn lookup(&self, key: &K) -> Option<&V>;

    fn size(&self) -> usize;
}

/// A dictionary stored as two parallel vectors.
///
/// `keys[i]` is paired with `values[i]`. Both vectors always have the same
/// length and keys never repeat. Every keyed operation is a linear scan using
/// `PartialEq`, so keys need no `Hash` or `Ord`.
#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Reserves room for `capacity` pairs, never more than `MAX_CAPACITY_HINT`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CAPACITY_HINT);
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn with_config(config: &DictionaryConfig) -> Self {
        Self::with_capacity(config.effective_capacity())
    }

    pub fn try_with_config(config: &DictionaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.initial_capacity))
    }

    pub fn size(&self) -> usize {
        debug_assert_eq!(self.keys.len(), self.values.len());
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Drops every pair and starts over with storage for `capacity` pairs.
    pub fn reset(&mut self, capacity: usize) {
        *self = Self::with_capacity(capacity);
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.keys.iter().zip(self.values.iter())
    }
}

pub type Iter<'a, K, V> = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>;
pub type IntoIter<K, V> = Zip<vec::IntoIter<K>, vec::IntoIter<V>>;

impl<K: PartialEq, V> Dictionary<K, V> {
    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|stored| stored == key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.position(key).map(|idx| &self.values[idx])
    }

    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.position(key) {
            Some(idx) => Some(&mut self.values[idx]),
            None => None,
        }
    }
}

// Mutations log the key they touch.
impl<K: PartialEq + fmt::Debug, V> Dictionary<K, V> {
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.contains_key(&key) {
            debug!("rejected insert of duplicate key {:?}", key);
            return Err(DictionaryError::DuplicateKey(format!("{:?}", key)));
        }
        trace!("insert {:?} at position {}", key, self.keys.len());
        self.keys.push(key);
        self.values.push(value);
        Ok(())
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.position(key) {
            Some(idx) => {
                trace!("remove {:?} from position {}", key, idx);
                self.keys.remove(idx);
                Some(self.values.remove(idx))
            }
            None => {
                debug!("remove found no key {:?}", key);
                None
            }
        }
    }

    pub fn update(&mut self, key: &K, value: V) -> bool {
        match self.position(key) {
            Some(idx) => {
                trace!("update {:?} at position {}", key, idx);
                self.values[idx] = value;
                true
            }
            None => {
                debug!("update found no key {:?}", key);
                false
            }
        }
    }

    /// Builds a dictionary from pairs, failing on the first repeated key.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        // `with_capacity` bounds an oversized lower bound.
        let mut dict = Self::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            dict.insert(key, value)?;
        }
        Ok(dict)
    }
}

impl<K: PartialEq + fmt::Debug, V> DictionaryAdt<K, V> for Dictionary<K, V> {
    fn insert(&mut self, key: K, value: V) -> Result<()> {
        Dictionary::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Dictionary::remove(self, key)
    }

    fn update(&mut self, key: &K, value: V) -> bool {
        Dictionary::update(self, key, value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        Dictionary::lookup(self, key)
    }

    fn size(&self) -> usize {
        Dictionary::size(self)
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq + fmt::Debug, V> TryFrom<Vec<(K, V)>> for Dictionary<K, V> {
    type Error = DictionaryError;

    fn try_from(pairs: Vec<(K, V)>) -> Result<Self> {
        Self::try_from_pairs(pairs)
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}
