//! Node of the radix trie and the recursive algorithms working on it.

use std::collections::BTreeMap;

use tracing::trace;

use super::UniquePrefix;

const TERMINAL_MARKER: char = '$';
const BRANCH: &str = "+ ";
const PIPE: &str = "| ";
const GAP: &str = "  ";

/// Lower-cased first character of a label, used as the child key.
pub(super) fn child_key(label: &str) -> Option<char> {
    label.chars().next().map(|c| c.to_ascii_lowercase())
}

/// Length in bytes of the case-insensitive common prefix of two ASCII strings.
pub(super) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x.eq_ignore_ascii_case(y))
        .count()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct TrieNode {
    /// Edge label from the parent down to this node.
    pub(super) label: String,
    /// Keyed by the lower-cased first character of each child's label.
    pub(super) children: BTreeMap<char, TrieNode>,
    pub(super) is_word: bool,
}

impl TrieNode {
    fn leaf(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: BTreeMap::new(),
            is_word: true,
        }
    }

    fn attach(&mut self, child: TrieNode) {
        if let Some(key) = child_key(&child.label) {
            self.children.insert(key, child);
        }
    }

    /// Inserts the remainder of a word below this node.
    ///
    /// Returns `true` if the word was not stored before.
    pub(super) fn insert(&mut self, word: &str) -> bool {
        let common = common_prefix_len(word, &self.label);
        let word_suffix = &word[common..];

        if common == self.label.len() {
            if word_suffix.is_empty() {
                return !std::mem::replace(&mut self.is_word, true);
            }

            return match child_key(word_suffix).and_then(|key| self.children.get_mut(&key)) {
                Some(child) => child.insert(word_suffix),
                None => {
                    self.attach(TrieNode::leaf(word_suffix));
                    true
                }
            };
        }

        // The word stops or diverges inside this label.
        self.split_at(common);
        if word_suffix.is_empty() {
            self.is_word = true;
        } else {
            self.attach(TrieNode::leaf(word_suffix));
        }
        true
    }

    /// Moves everything after `at` into a new single child.
    ///
    /// The child takes over the old terminal flag and all old children;
    /// this node keeps the shortened label and stops being a word.
    fn split_at(&mut self, at: usize) {
        let tail = TrieNode {
            label: self.label.split_off(at),
            children: std::mem::take(&mut self.children),
            is_word: std::mem::replace(&mut self.is_word, false),
        };
        trace!(head = %self.label, tail = %tail.label, "split node");
        self.attach(tail);
    }

    pub(super) fn find(&self, word: &str) -> Option<&TrieNode> {
        let common = common_prefix_len(word, &self.label);
        if common != self.label.len() {
            return None;
        }

        let rest = &word[common..];
        match child_key(rest) {
            None => Some(self),
            Some(key) => self.children.get(&key)?.find(rest),
        }
    }

    /// Collects words below this node whose remainder starts with `prefix`.
    ///
    /// `path` holds every label above this node.
    pub(super) fn collect_with_prefix(
        &self,
        prefix: &str,
        path: &mut String,
        results: &mut Vec<String>,
    ) {
        let common = common_prefix_len(prefix, &self.label);
        let start = path.len();
        path.push_str(&self.label);

        if common == prefix.len() {
            self.collect_words(path, results);
        } else if common == self.label.len() {
            let rest = &prefix[common..];
            if let Some(child) = child_key(rest).and_then(|key| self.children.get(&key)) {
                child.collect_with_prefix(rest, path, results);
            }
        }

        path.truncate(start);
    }

    /// Pre-order walk; `path` already ends with this node's label.
    pub(super) fn collect_words(&self, path: &mut String, results: &mut Vec<String>) {
        if self.is_word {
            results.push(path.clone());
        }

        for child in self.children.values() {
            let start = path.len();
            path.push_str(&child.label);
            child.collect_words(path, results);
            path.truncate(start);
        }
    }

    pub(super) fn render_into(&self, out: &mut String, indent: &mut String) {
        out.push_str(&self.label);
        if self.is_word {
            out.push(TERMINAL_MARKER);
        }
        out.push('\n');

        let last = self.children.len().saturating_sub(1);
        for (i, child) in self.children.values().enumerate() {
            out.push_str(indent);
            out.push_str(BRANCH);
            indent.push_str(if i < last { PIPE } else { GAP });
            child.render_into(out, indent);
            indent.truncate(indent.len() - PIPE.len());
        }
    }

    /// Post-order walk emitting the shortest disambiguating prefix of every word.
    ///
    /// `path` holds every label above this node.
    pub(super) fn collect_prefixes(&self, path: &mut String, results: &mut Vec<UniquePrefix>) {
        let start = path.len();

        if self.children.is_empty() {
            // Siblings already differ in their first character, so one
            // character past the parent is enough.
            if let (true, Some(first)) = (self.is_word, self.label.chars().next()) {
                let mut prefix = path.clone();
                prefix.push(first);
                path.push_str(&self.label);
                results.push(UniquePrefix {
                    word: path.clone(),
                    prefix,
                });
                path.truncate(start);
            }
            return;
        }

        path.push_str(&self.label);
        for child in self.children.values() {
            child.collect_prefixes(path, results);
        }

        // Every proper prefix of this word also starts a longer word below.
        if self.is_word {
            results.push(UniquePrefix {
                word: path.clone(),
                prefix: path.clone(),
            });
        }
        path.truncate(start);
    }
}
