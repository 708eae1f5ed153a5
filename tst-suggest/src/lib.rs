//! Ternary search trie tuned for prefix suggestions.
//!
//! Words are inserted once (usually a whole dictionary at startup) and then
//! queried by prefix with [`Trie::suggest`] and [`Trie::count`].

pub mod dict;
pub mod error;
mod suggestions;
pub mod trie;

pub use error::TrieError;
pub use suggestions::Suggestions;
pub use trie::Trie;
