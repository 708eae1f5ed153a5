use std::borrow::Cow;

use super::error::DictionaryBuildError;

/// How the lines of a word list are turned into trie entries.
///
/// The defaults read a Hunspell `.dic` file: a word count on the first line,
/// then one `word/FLAGS` entry per line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DictionaryFormat {
    pub count_header: bool,
    pub strip_flags: bool,
    pub flag_separator: char,
    pub lowercase: bool,
}

impl Default for DictionaryFormat {
    fn default() -> Self {
        Self {
            count_header: true,
            strip_flags: true,
            flag_separator: '/',
            lowercase: false,
        }
    }
}

impl DictionaryFormat {
    /// One word per line, nothing else.
    pub fn plain() -> Self {
        Self {
            count_header: false,
            strip_flags: false,
            ..Self::default()
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, DictionaryBuildError> {
        Ok(toml::from_str::<DictionaryFormat>(content)?)
    }

    /// Word carried by `line`, `None` when there is nothing to insert.
    pub(crate) fn entry<'a>(&self, line: &'a str) -> Option<Cow<'a, str>> {
        let word = if self.strip_flags {
            line.split(self.flag_separator).next().unwrap_or_default()
        } else {
            line
        };

        let word = word.trim();
        if word.is_empty() {
            return None;
        }

        if self.lowercase {
            Some(Cow::Owned(word.to_lowercase()))
        } else {
            Some(Cow::Borrowed(word))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunspell_entry() {
        let format = DictionaryFormat::default();

        assert_eq!(format.entry("maison/S.").as_deref(), Some("maison"));
        assert_eq!(format.entry("  chat  ").as_deref(), Some("chat"));
        assert_eq!(format.entry("/S."), None);
        assert_eq!(format.entry("   "), None);
    }

    #[test]
    fn test_plain_entry() {
        let format = DictionaryFormat::plain();

        assert_eq!(format.entry("and/or").as_deref(), Some("and/or"));
        assert!(!format.count_header);
    }

    #[test]
    fn test_lowercase_entry() {
        let format = DictionaryFormat {
            lowercase: true,
            ..DictionaryFormat::default()
        };

        assert_eq!(format.entry("Paris/L").as_deref(), Some("paris"));
    }

    #[test]
    fn test_from_toml() -> anyhow::Result<()> {
        assert_eq!(DictionaryFormat::from_toml("")?, DictionaryFormat::default());

        let format = DictionaryFormat::from_toml("count_header = false\nflag_separator = \"#\"")?;
        assert!(!format.count_header);
        assert!(format.strip_flags);
        assert_eq!(format.flag_separator, '#');
        Ok(())
    }

    #[test]
    fn test_from_invalid_toml() {
        let result = DictionaryFormat::from_toml("count_header = 3");
        assert!(matches!(result, Err(DictionaryBuildError::InvalidFormat(_))));
    }
}
