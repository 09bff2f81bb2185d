pub mod collections;
pub mod config;
pub mod error;
pub mod sync;

pub use collections::{Dictionary, DictionaryAdt};
pub use config::{DictionaryConfig, DEFAULT_CAPACITY, MAX_CAPACITY_HINT};
pub use error::{DictionaryError, Result};
pub use sync::SharedDictionary;
