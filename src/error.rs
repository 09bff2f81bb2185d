use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("{0} already exists.")]
    DuplicateKey(String),
    #[error("invalid dictionary configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
