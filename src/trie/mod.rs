//! Compressed prefix tree (radix trie) over ASCII words.
//!
//! Edges carry whole runs of characters. Inserting a word that stops or
//! diverges in the middle of an edge splits that edge, so that no two
//! siblings ever share a first character. Comparison ignores ASCII case;
//! labels keep the casing of the word that created them.

mod node;

use std::fmt;

use tracing::debug;

use crate::error::{TrieResult, validate_word};
use node::TrieNode;

/// A stored word together with the shortest prefix that identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquePrefix {
    pub word: String,
    pub prefix: String,
}

impl fmt::Display for UniquePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.prefix)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RadixTrie {
    root: TrieNode,
    len: usize,
}

impl RadixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a word made of ASCII letters.
    ///
    /// Returns `Ok(true)` if the word is new, `Ok(false)` if it was
    /// already stored (in any casing). Malformed words are rejected and
    /// leave the trie untouched.
    pub fn insert(&mut self, word: &str) -> TrieResult<bool> {
        validate_word(word)?;

        let added = if self.root.label.is_empty() && self.root.children.is_empty() {
            // Nothing to compare against yet; the first word becomes the root label.
            self.root.label = word.to_string();
            self.root.is_word = true;
            true
        } else {
            self.root.insert(word)
        };

        if added {
            self.len += 1;
            debug!(word, len = self.len, "inserted word");
        }
        Ok(added)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.root.find(word).is_some_and(|node| node.is_word)
    }

    /// All stored words in case-folded alphabetical order.
    pub fn words(&self) -> Vec<String> {
        self.words_starting_with("")
    }

    /// Gets stored words starting with `prefix`, ignoring case.
    pub fn words_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut buffer = String::new();
        self.root.collect_with_prefix(prefix, &mut buffer, &mut results);
        results
    }

    /// Renders the tree one node per line.
    ///
    /// The root comes first without indentation. Every other node is
    /// written as `+ label`, indented by `"| "` for each ancestor that
    /// still has later siblings and by two spaces otherwise. Stored words
    /// end with `$`.
    ///
    /// ```text
    ///
    /// + ale
    /// | + k$
    /// | | + s$
    /// | |   + ey$
    /// | + sha$
    /// + sasha$
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.root.render_into(&mut out, &mut String::new());
        out
    }

    /// Shortest prefix of every stored word that no other word shares.
    ///
    /// A word that is itself a prefix of longer stored words has no
    /// shorter candidate and is reported in full. Entries come out in
    /// post-order: longer words below a node before the node's own word.
    pub fn minimal_prefixes(&self) -> Vec<UniquePrefix> {
        let mut results = Vec::with_capacity(self.len);
        self.root.collect_prefixes(&mut String::new(), &mut results);
        results
    }
}

impl fmt::Display for RadixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}


#[cfg(test)]
mod proptests;
