use thiserror::Error;

use crate::error::TrieError;

#[derive(Error, Debug)]
pub enum DictionaryBuildError {
    #[error("Cannot open file")]
    OpeningFile(#[from] std::io::Error),
    #[error("Missing word count on the first line")]
    InvalidFormatNoCount(#[from] std::num::ParseIntError),
    #[error("Invalid dictionary format")]
    InvalidFormat(#[from] toml::de::Error),
    #[error(transparent)]
    Insert(#[from] TrieError),
}
