use std::iter::FusedIterator;

use crate::trie::{NodeId, Trie};

enum Frame {
    /// Queue the node's siblings ahead of the node itself.
    Visit { id: NodeId, base: usize },
    /// Append the node's character, report it if it ends a word, go `mid`.
    Advance { id: NodeId, base: usize },
}

/// Iterator over the words below a prefix, see [`Trie::suggestions`].
///
/// `buffer` holds the word being built. Each frame remembers the buffer
/// length it started from and truncates back to it, so characters pushed in
/// one sibling branch never show up in the next.
pub struct Suggestions<'a> {
    trie: &'a Trie,
    buffer: String,
    prefix_is_word: bool,
    stack: Vec<Frame>,
}

impl<'a> Suggestions<'a> {
    pub(crate) fn new(
        trie: &'a Trie,
        prefix: String,
        prefix_is_word: bool,
        subtree: Option<NodeId>,
    ) -> Self {
        let base = prefix.len();
        Self {
            trie,
            buffer: prefix,
            prefix_is_word,
            stack: subtree
                .map(|id| Frame::Visit { id, base })
                .into_iter()
                .collect(),
        }
    }
}

impl Iterator for Suggestions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.prefix_is_word {
            self.prefix_is_word = false;
            return Some(self.buffer.clone());
        }

        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Visit { id, base } => {
                    let node = self.trie.node(id);
                    self.stack.push(Frame::Advance { id, base });
                    if let Some(right) = node.right {
                        self.stack.push(Frame::Visit { id: right, base });
                    }
                    if let Some(left) = node.left {
                        self.stack.push(Frame::Visit { id: left, base });
                    }
                }
                Frame::Advance { id, base } => {
                    let node = self.trie.node(id);
                    self.buffer.truncate(base);
                    self.buffer.push(node.character);
                    if let Some(mid) = node.mid {
                        self.stack.push(Frame::Visit {
                            id: mid,
                            base: self.buffer.len(),
                        });
                    }
                    if node.end_of_word {
                        return Some(self.buffer.clone());
                    }
                }
            }
        }

        None
    }
}

impl FusedIterator for Suggestions<'_> {}

#[cfg(test)]
mod tests {
    use crate::trie::Trie;

    #[test]
    fn test_lazy_take() -> anyhow::Result<()> {
        let mut trie = Trie::new();
        for word in ["salted", "saltine", "sally", "salary"] {
            trie.insert(word)?;
        }

        let first: Vec<String> = trie.suggestions("sal").take(2).collect();
        assert_eq!(first, vec!["salary", "sally"]);
        Ok(())
    }

    #[test]
    fn test_no_leak_between_siblings() -> anyhow::Result<()> {
        let mut trie = Trie::new();
        for word in ["abcd", "abd", "ae", "b"] {
            trie.insert(word)?;
        }

        let mut all = trie.suggest("");
        all.sort();
        assert_eq!(all, vec!["abcd", "abd", "ae", "b"]);
        Ok(())
    }

    #[test]
    fn test_fused() -> anyhow::Result<()> {
        let mut trie = Trie::new();
        trie.insert("one")?;

        let mut suggestions = trie.suggestions("o");
        assert_eq!(suggestions.next().as_deref(), Some("one"));
        assert_eq!(suggestions.next(), None);
        assert_eq!(suggestions.next(), None);
        Ok(())
    }

    #[test]
    fn test_unknown_prefix() {
        let trie = Trie::new();
        assert_eq!(trie.suggestions("a").count(), 0);
    }
}
