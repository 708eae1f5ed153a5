pub mod error;
pub mod format;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::trie::Trie;
use error::DictionaryBuildError;
use format::DictionaryFormat;

/// Word list loaded once and queried by prefix, e.g. for a spell checker.
pub struct Dictionary {
    words: Trie,
}

impl Dictionary {
    pub fn try_build_from_path(
        dict: &Path,
        format: &DictionaryFormat,
    ) -> Result<Self, DictionaryBuildError> {
        let dict_file = File::open(dict)?;
        let dictionary = Dictionary::try_build(BufReader::new(dict_file), format)?;
        info!("dictionary {} loaded", dict.display());
        Ok(dictionary)
    }

    pub fn try_build<T>(reader: T, format: &DictionaryFormat) -> Result<Self, DictionaryBuildError>
    where
        T: BufRead,
    {
        let mut lines = reader.lines();

        let mut declared = None;
        if format.count_header
            && let Some(first) = lines.next()
        {
            declared = Some(first?.trim().parse::<usize>()?);
        }

        let mut words = Trie::new();
        for line in lines {
            Self::insert_line(&mut words, format, &line?)?;
        }

        if let Some(declared) = declared
            && declared != words.len()
        {
            debug!("declared {declared} words, loaded {}", words.len());
        }
        info!("dictionary built with {} words", words.len());

        Ok(Self { words })
    }

    fn insert_line(
        words: &mut Trie,
        format: &DictionaryFormat,
        line: &str,
    ) -> Result<(), DictionaryBuildError> {
        match format.entry(line) {
            Some(word) => words.insert(&word)?,
            None => trace!("skipping line {line:?}"),
        }
        Ok(())
    }

    pub fn check_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.words.suggest(prefix)
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.words.count(prefix)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn trie(&self) -> &Trie {
        &self.words
    }
}
