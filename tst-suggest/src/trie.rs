use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::TrieError;
use crate::suggestions::Suggestions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) character: char,
    pub(crate) left: Option<NodeId>,
    pub(crate) mid: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) end_of_word: bool,
    // insertions whose path advances through this node
    pub(crate) subtree_size: usize,
}

impl Node {
    fn new(character: char) -> Self {
        Self {
            character,
            left: None,
            mid: None,
            right: None,
            end_of_word: false,
            subtree_size: 0,
        }
    }
}

/// Slot a node id is written back into during insertion.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(NodeId),
    Mid(NodeId),
    Right(NodeId),
}

/// Ternary search trie over `char` units.
///
/// Nodes live in an arena owned by the trie and are never removed. Every walk
/// is iterative, so long words or wide sibling chains only cost heap space.
#[derive(Debug, Default)]
pub struct Trie {
    root: Option<NodeId>,
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    // ids are only minted by `resolve_or_create`, so they always index `nodes`
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[allow(clippy::indexing_slicing)]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn link(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Left(parent) => self.node(parent).left,
            Link::Mid(parent) => self.node(parent).mid,
            Link::Right(parent) => self.node(parent).right,
        }
    }

    fn set_link(&mut self, link: Link, id: NodeId) {
        match link {
            Link::Root => self.root = Some(id),
            Link::Left(parent) => self.node_mut(parent).left = Some(id),
            Link::Mid(parent) => self.node_mut(parent).mid = Some(id),
            Link::Right(parent) => self.node_mut(parent).right = Some(id),
        }
    }

    /// Returns the node behind `link`, creating one holding `character` when
    /// the slot is empty. The id is written back into the slot either way.
    fn resolve_or_create(&mut self, link: Link, character: char) -> NodeId {
        let id = match self.link(link) {
            Some(id) => id,
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(Node::new(character));
                id
            }
        };
        self.set_link(link, id);
        id
    }

    /// Inserts `word`. Inserting the same word again is allowed and bumps the
    /// counts along its path a second time.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        let mut chars = word.chars();
        let Some(mut character) = chars.next() else {
            return Err(TrieError::InvalidInput);
        };

        let mut link = Link::Root;
        loop {
            let id = self.resolve_or_create(link, character);
            let node = self.node_mut(id);
            match character.cmp(&node.character) {
                Ordering::Less => link = Link::Left(id),
                Ordering::Greater => link = Link::Right(id),
                Ordering::Equal => {
                    node.subtree_size += 1;
                    match chars.next() {
                        Some(next) => {
                            character = next;
                            link = Link::Mid(id);
                        }
                        None => {
                            node.end_of_word = true;
                            break;
                        }
                    }
                }
            }
        }

        self.words += 1;
        trace!("inserted {word}");
        Ok(())
    }

    /// Finds the node holding the last character of `prefix`.
    pub(crate) fn locate(&self, prefix: &str) -> Option<NodeId> {
        let mut chars = prefix.chars();
        let mut character = chars.next()?;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            match character.cmp(&node.character) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        character = next;
                        current = node.mid;
                    }
                    None => return Some(id),
                },
            }
        }

        trace!("prefix {prefix} not found");
        None
    }

    /// Number of insertions starting with `prefix`, duplicates included.
    pub fn count(&self, prefix: &str) -> usize {
        if prefix.is_empty() {
            return self.words;
        }
        self.locate(prefix).map_or(0, |id| self.node(id).subtree_size)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.locate(word).is_some_and(|id| self.node(id).end_of_word)
    }

    /// Lazily enumerates the stored words starting with `prefix`.
    ///
    /// The prefix itself comes first when it is a word. Below it, each
    /// position yields its `left` siblings, then its `right` siblings, then
    /// the word ending at the node, then the words continuing through `mid`.
    /// The result is therefore not alphabetical.
    pub fn suggestions(&self, prefix: &str) -> Suggestions<'_> {
        if prefix.is_empty() {
            return Suggestions::new(self, String::new(), false, self.root);
        }

        match self.locate(prefix) {
            Some(id) => {
                let node = self.node(id);
                Suggestions::new(self, prefix.to_string(), node.end_of_word, node.mid)
            }
            None => Suggestions::new(self, String::new(), false, None),
        }
    }

    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.suggestions(prefix).collect()
    }

    /// Same as [`Trie::suggest`], one word per line.
    pub fn suggest_joined(&self, prefix: &str) -> String {
        self.suggest(prefix).join("\n")
    }

    /// Debug dump, one `character: subtree_size` line per node.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Number of successful insertions.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl fmt::Display for Trie {
    /// Depth first, a tab per `mid` level, children printed right, mid, left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 0)).into_iter().collect();
        let mut first = true;

        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            for _ in 0..depth {
                f.write_str("\t")?;
            }
            write!(f, "{}: {}", node.character, node.subtree_size)?;

            stack.extend(node.left.map(|left| (left, depth)));
            stack.extend(node.mid.map(|mid| (mid, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth)));
        }
        Ok(())
    }
}
