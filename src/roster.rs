use crate::trie::{RadixTrie, UniquePrefix};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{info, warn};

/// What to do with a line that is not a valid word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidWordPolicy {
    /// Stop reading and report the line
    #[default]
    Reject,
    /// Log a warning and carry on with the next line
    Skip,
}

/// Nicknames read from a word list, one per line
pub struct Roster {
    trie: RadixTrie,
    skipped: usize,
}

impl Roster {
    /// Opens `path`, or stdin when no path is given
    pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
        match path {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }

    /// Loads every line of `reader` into a fresh trie
    ///
    /// `on_insert` sees the trie after each accepted line
    pub fn load<R, F>(reader: R, policy: InvalidWordPolicy, mut on_insert: F) -> Result<Self>
    where
        R: BufRead,
        F: FnMut(&RadixTrie) -> Result<()>,
    {
        let mut trie = RadixTrie::new();
        let mut skipped = 0;

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
            let word = line.trim();

            match trie.insert(word) {
                Ok(_) => on_insert(&trie)?,
                Err(err) if policy == InvalidWordPolicy::Skip => {
                    warn!(line = line_no, %err, "skipping line");
                    skipped += 1;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("Invalid word on line {line_no}"));
                }
            }
        }

        info!(words = trie.len(), skipped, "roster loaded");
        Ok(Self { trie, skipped })
    }

    pub fn trie(&self) -> &RadixTrie {
        &self.trie
    }

    /// Number of lines dropped under [`InvalidWordPolicy::Skip`]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Gets nicknames starting with prefix
    pub fn nicknames_starting_with(&self, prefix: &str) -> Vec<String> {
        self.trie.words_starting_with(prefix)
    }

    pub fn minimal_prefixes(&self) -> Vec<UniquePrefix> {
        self.trie.minimal_prefixes()
    }

    /// Writes one `word prefix` line per stored nickname
    pub fn write_prefixes<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in self.minimal_prefixes() {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }
}
