//! Nickname trie: a compressed prefix tree over ASCII words that renders
//! its own shape and finds the shortest prefix identifying every word.
//!
//! ```
//! use nicknames::trie::RadixTrie;
//!
//! let mut trie = RadixTrie::new();
//! trie.insert("aleksey").unwrap();
//! trie.insert("aleks").unwrap();
//!
//! assert_eq!(trie.render(), "aleks$\n+ ey$\n");
//! assert_eq!(trie.minimal_prefixes()[0].prefix, "alekse");
//! ```

pub mod error;
pub mod roster;
pub mod trie;
