//! Error types for the radix trie.

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Reasons a word is refused by [`crate::trie::RadixTrie::insert`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The word has no characters.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word contains something other than an ASCII letter.
    #[error("Invalid character {character:?} at position {position} in word '{word}'")]
    InvalidCharacter {
        /// The rejected word.
        word: String,
        /// The first offending character.
        character: char,
        /// Zero-based character index of `character`.
        position: usize,
    },
}

/// Checks that `word` is a non-empty run of ASCII letters.
pub fn validate_word(word: &str) -> TrieResult<()> {
    if word.is_empty() {
        return Err(TrieError::EmptyWord);
    }

    match word.chars().enumerate().find(|(_, c)| !c.is_ascii_alphabetic()) {
        Some((position, character)) => Err(TrieError::InvalidCharacter {
            word: word.to_string(),
            character,
            position,
        }),
        None => Ok(()),
    }
}
