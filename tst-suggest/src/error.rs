use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrieError {
    #[error("cannot insert an empty word")]
    InvalidInput,
}
