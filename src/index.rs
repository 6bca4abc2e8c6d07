//! Common interface of the string indexes.

use crate::bst::BstSet;
use crate::error::Result;
use crate::trie::TrieSet;

/// A set of string keys supporting insertion, exact lookup and destruction.
///
/// # Examples
///
/// ```
/// use string_index::bst::BstSet;
/// use string_index::index::StringIndex;
/// use string_index::trie::TrieSet;
///
/// fn load<T: StringIndex>(mut index: T, words: &[&str]) -> T {
///     for word in words {
///         index.insert(word).unwrap();
///     }
///     index
/// }
///
/// let bst = load(BstSet::new(), &["casa", "dado"]);
/// let trie = load(TrieSet::new(), &["casa", "dado"]);
/// assert!(StringIndex::contains(&bst, "casa"));
/// assert!(StringIndex::contains(&trie, "dado"));
/// ```
pub trait StringIndex {
    /// Inserts a key. Returns `Ok(false)` if the key already existed.
    fn insert(&mut self, key: &str) -> Result<bool>;

    /// Returns `true` if the key exists.
    fn contains(&self, key: &str) -> bool;

    /// Returns the number of keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every node and returns the number of released nodes.
    fn destroy(self) -> usize
    where
        Self: Sized;
}

impl StringIndex for BstSet {
    fn insert(&mut self, key: &str) -> Result<bool> {
        BstSet::insert(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        BstSet::search(self, key)
    }

    fn len(&self) -> usize {
        BstSet::len(self)
    }

    fn destroy(self) -> usize {
        BstSet::destroy(self)
    }
}

impl StringIndex for TrieSet {
    fn insert(&mut self, key: &str) -> Result<bool> {
        TrieSet::insert(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        TrieSet::search(self, key)
    }

    fn len(&self) -> usize {
        TrieSet::len(self)
    }

    fn destroy(self) -> usize {
        TrieSet::destroy(self)
    }
}
