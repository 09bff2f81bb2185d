use serde::{Deserialize, Serialize};

use crate::error::{DictionaryError, Result};

/// Capacity reserved by `Dictionary::new`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest capacity hint a config may ask for up front.
pub const MAX_CAPACITY_HINT: usize = 1 << 20;

/// Construction options for a `Dictionary`.
///
/// The capacity is only a reservation; it never changes what the dictionary
/// stores or reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    pub initial_capacity: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DictionaryConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_CAPACITY_HINT {
            return Err(DictionaryError::InvalidConfig(format!(
                "initial_capacity {} exceeds {}",
                self.initial_capacity, MAX_CAPACITY_HINT
            )));
        }
        Ok(())
    }

    /// Capacity to actually reserve, clamped to `MAX_CAPACITY_HINT`.
    pub fn effective_capacity(&self) -> usize {
        self.initial_capacity.min(MAX_CAPACITY_HINT)
    }
}
