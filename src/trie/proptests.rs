use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

fn validate_node(current: &TrieNode, is_root: bool) {
    if !is_root {
        assert!(!current.label.is_empty(), "only the root may have an empty label");
    }

    if !current.is_word {
        assert_ne!(
            current.children.len(),
            1,
            "non-word node '{}' must branch",
            current.label
        );
        assert!(
            is_root || !current.children.is_empty(),
            "leaf '{}' must be a word",
            current.label
        );
    }

    for (key, child) in &current.children {
        assert_eq!(
            Some(*key),
            node::child_key(&child.label),
            "child key must be the first letter of its label"
        );
        validate_node(child, false);
    }
}

fn validate_trie(trie: &RadixTrie) {
    validate_node(&trie.root, true);
    assert_eq!(trie.words().len(), trie.len());
}

/// Shortest prefix of `word` shared by no other word, or `word` itself.
fn brute_force_prefix(word: &str, words: &BTreeSet<String>) -> String {
    (1..=word.len())
        .map(|n| &word[..n])
        .find(|p| words.iter().all(|w| w == word || !w.starts_with(p)))
        .unwrap_or(word)
        .to_string()
}

fn build(words: &[String]) -> RadixTrie {
    let mut trie = RadixTrie::new();
    for word in words {
        trie.insert(word).unwrap();
    }
    trie
}

proptest! {
    #[test]
    fn prop_structure_invariants(words in prop::collection::vec("[a-d]{1,6}", 1..40)) {
        let mut trie = RadixTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
            validate_trie(&trie);
        }
    }

    #[test]
    fn prop_words_round_trip(words in prop::collection::vec("[a-e]{1,8}", 0..40)) {
        let trie = build(&words);
        let expected: Vec<String> =
            words.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(trie.words(), expected.clone());
        prop_assert_eq!(trie.len(), expected.len());
        for word in &expected {
            prop_assert!(trie.contains(word));
        }
    }

    #[test]
    fn prop_reinsert_is_idempotent(words in prop::collection::vec("[a-c]{1,5}", 1..30)) {
        let mut trie = build(&words);
        let before = trie.clone();

        for word in &words {
            prop_assert_eq!(trie.insert(word), Ok(false));
        }
        prop_assert_eq!(&trie, &before);
        prop_assert_eq!(trie.render(), before.render());
    }

    #[test]
    fn prop_minimal_prefixes_are_shortest(words in prop::collection::vec("[a-d]{1,6}", 1..40)) {
        let trie = build(&words);
        let stored: BTreeSet<String> = words.iter().cloned().collect();
        let prefixes = trie.minimal_prefixes();

        prop_assert_eq!(prefixes.len(), stored.len());
        let reported: BTreeSet<String> = prefixes.iter().map(|p| p.word.clone()).collect();
        prop_assert_eq!(&reported, &stored);

        for UniquePrefix { word, prefix } in &prefixes {
            prop_assert!(word.starts_with(prefix.as_str()));
            prop_assert_eq!(prefix, &brute_force_prefix(word, &stored));
        }
    }

    #[test]
    fn prop_case_is_ignored(words in prop::collection::vec("[a-cA-C]{1,5}", 1..30)) {
        let trie = build(&words);
        let lowered: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
        let folded = build(&lowered);

        prop_assert_eq!(trie.len(), folded.len());
        prop_assert_eq!(
            trie.words().iter().map(|w| w.to_ascii_lowercase()).collect::<Vec<_>>(),
            folded.words()
        );
        prop_assert_eq!(trie.render().to_ascii_lowercase(), folded.render());
        validate_trie(&trie);
    }

    #[test]
    fn prop_prefix_listing_matches_filter(
        words in prop::collection::vec("[a-d]{1,6}", 0..30),
        prefix in "[a-d]{0,3}",
    ) {
        let trie = build(&words);
        let expected: Vec<String> = words
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .collect();

        prop_assert_eq!(trie.words_starting_with(&prefix), expected);
    }
}
