use crate::arena::{NodeArena, NodeId};
use crate::config::{Config, InvalidCharPolicy};
use crate::error::{Error, Result};
use crate::key;
use crate::trie::node::{char_to_index, index_to_char, Node, ALPHABET_SIZE};

const CHUNK_SIZE: usize = 256;

/// A set of words implemented using a prefix tree.
///
/// Every node has one child slot for each letter from `a` to `z`, so looking up a word takes time
/// proportional to the length of the word regardless of how many words are stored. Letters are
/// case-folded, so `"Casa"` and `"casa"` are the same word.
///
/// Characters outside of the alphabet are handled according to the policies of the `Config` of
/// the set. By default inserts skip such characters while searches report that the word does not
/// exist. A word that only consists of skipped characters marks the root as the end of a word, so
/// it becomes equivalent to the empty word.
///
/// Nodes are stored in a `NodeArena` and the root is always present. The `max_nodes` limit of the
/// configuration counts the root.
///
/// # Examples
///
/// ```
/// use string_index::trie::TrieSet;
///
/// let mut set = TrieSet::new();
/// set.insert("casa").unwrap();
/// set.insert("carro").unwrap();
/// set.insert("caminhao").unwrap();
///
/// assert!(set.search("carro"));
/// assert!(!set.search("caminh"));
/// assert!(set.starts_with("caminh"));
///
/// assert_eq!(set.words_with_prefix("car"), vec!["carro"]);
/// assert_eq!(set.words(), vec!["caminhao", "carro", "casa"]);
/// ```
pub struct TrieSet {
    arena: NodeArena<Node>,
    root: Node,
    len: usize,
    config: Config,
}

impl TrieSet {
    /// Constructs a new `TrieSet` with the default `Config`.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Constructs a new `TrieSet` with a specific `Config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::config::{Config, InvalidCharPolicy};
    /// use string_index::error::Error;
    /// use string_index::trie::TrieSet;
    ///
    /// let config = Config::default().insert_policy(InvalidCharPolicy::Reject);
    /// let mut set = TrieSet::with_config(config);
    /// assert_eq!(
    ///     set.insert("avião"),
    ///     Err(Error::InvalidCharacter { character: 'ã', position: 3 }),
    /// );
    /// ```
    pub fn with_config(config: Config) -> Self {
        let limit = config.max_nodes.map(|max_nodes| max_nodes.saturating_sub(1));
        TrieSet {
            arena: NodeArena::with_limit(CHUNK_SIZE, limit),
            root: Node::new(),
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn node(&self, cursor: Option<NodeId>) -> &Node {
        match cursor {
            None => &self.root,
            Some(id) => &self.arena[id],
        }
    }

    fn node_mut(&mut self, cursor: Option<NodeId>) -> &mut Node {
        match cursor {
            None => &mut self.root,
            Some(id) => &mut self.arena[id],
        }
    }

    /// Inserts a word into the set. Returns `Ok(true)` if the word was added and `Ok(false)` if
    /// it already existed.
    ///
    /// Returns `Error::KeyTooLong` if the word is longer than the configured maximum,
    /// `Error::InvalidCharacter` if the word contains a character outside of the alphabet and the
    /// insert policy is `InvalidCharPolicy::Reject`, and `Error::AllocationFailure` if the nodes
    /// for the word cannot be allocated. The set is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    /// assert_eq!(set.insert("dado"), Ok(true));
    /// assert_eq!(set.insert("DADO"), Ok(false));
    /// assert_eq!(set.insert("da-do"), Ok(false));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        key::check_len(word, self.config.max_key_len)?;

        let mut path = Vec::with_capacity(word.len());
        for (position, character) in word.chars().enumerate() {
            match char_to_index(character) {
                Some(index) => path.push(index),
                None => match self.config.insert_policy {
                    InvalidCharPolicy::Skip => {
                        debug!("skipping {:?} at position {} of {:?}", character, position, word);
                    },
                    InvalidCharPolicy::Reject => {
                        return Err(Error::InvalidCharacter { character, position });
                    },
                },
            }
        }

        let mut cursor = None;
        let mut missing = 0;
        for (depth, &index) in path.iter().enumerate() {
            match self.node(cursor).children[index] {
                Some(id) => cursor = Some(id),
                None => {
                    missing = path.len() - depth;
                    break;
                },
            }
        }

        if missing > 0 {
            self.arena.try_reserve(missing)?;
            for &index in &path[path.len() - missing..] {
                let id = self.arena.allocate(Node::new())?;
                self.node_mut(cursor).children[index] = Some(id);
                cursor = Some(id);
            }
            debug!("allocated {} node(s) for {:?}", missing, word);
        }

        let node = self.node_mut(cursor);
        if node.is_terminal {
            trace!("ignoring duplicate word {:?}", word);
            return Ok(false);
        }
        node.is_terminal = true;
        self.len += 1;
        Ok(true)
    }

    fn find(&self, word: &str, policy: InvalidCharPolicy) -> Option<&Node> {
        let mut curr = &self.root;
        for character in word.chars() {
            match char_to_index(character) {
                Some(index) => match curr.children[index] {
                    Some(id) => curr = &self.arena[id],
                    None => return None,
                },
                None => match policy {
                    InvalidCharPolicy::Skip => continue,
                    InvalidCharPolicy::Reject => return None,
                },
            }
        }
        Some(curr)
    }

    /// Returns `true` if the word exists in the set.
    ///
    /// With the default search policy, a word that contains a character outside of the alphabet is
    /// never found, even if the same word was inserted with that character skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    /// set.insert("caminhao").unwrap();
    /// assert!(set.search("caminhao"));
    /// assert!(!set.search("caminh"));
    /// assert!(!set.search("caminhão"));
    /// ```
    pub fn search(&self, word: &str) -> bool {
        if word.len() > self.config.max_key_len {
            return false;
        }
        self.find(word, self.config.search_policy)
            .map_or(false, |node| node.is_terminal)
    }

    /// Alias of `search`.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Returns `true` if some word in the set starts with `prefix`. Invalid characters in the
    /// prefix are handled according to the search policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    /// assert!(!set.starts_with(""));
    /// set.insert("bola").unwrap();
    /// assert!(set.starts_with("bo"));
    /// assert!(!set.starts_with("ba"));
    /// ```
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix, self.config.search_policy)
            .map_or(false, |node| node.is_terminal || !node.is_leaf())
    }

    /// Returns every word in the set that starts with `prefix` in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self.find(prefix, self.config.search_policy) {
            Some(node) => {
                let prefix = prefix
                    .chars()
                    .filter_map(char_to_index)
                    .map(index_to_char)
                    .collect();
                TrieSetIter::new(&self.arena, node, prefix).collect()
            },
            None => Vec::new(),
        }
    }

    /// Returns every word in the set in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns an iterator over the set. The iterator will yield words in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    /// set.insert("casa").unwrap();
    /// set.insert("arvore").unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(String::from("arvore")));
    /// assert_eq!(iterator.next(), Some(String::from("casa")));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TrieSetIter {
        TrieSetIter::new(&self.arena, &self.root, String::new())
    }

    /// Returns the number of words in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, including the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    /// assert_eq!(set.node_count(), 1);
    /// set.insert("casa").unwrap();
    /// set.insert("carro").unwrap();
    /// assert_eq!(set.node_count(), 8);
    /// ```
    pub fn node_count(&self) -> usize {
        self.arena.len() + 1
    }

    // Frees every node below the root in post-order and returns the number of freed nodes.
    fn release_children(&mut self) -> usize {
        let mut released = 0;
        let mut stack = Vec::new();
        for child in self.root.children.iter().rev().filter_map(|child| *child) {
            stack.push((child, false));
        }
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                self.arena.free(&id);
                released += 1;
                continue;
            }
            stack.push((id, true));
            let children = self.arena[id].children;
            for child in children.iter().rev().filter_map(|child| *child) {
                stack.push((child, false));
            }
        }
        self.root = Node::new();
        self.len = 0;
        released
    }

    /// Clears the set, releasing every node except for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    /// set.insert("casa").unwrap();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.node_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        let released = self.release_children();
        debug!("released {} node(s)", released);
    }

    /// Destroys the set, releasing every node exactly once with children released before their
    /// parent. Returns the number of released nodes, including the root.
    pub fn destroy(mut self) -> usize {
        let released = self.release_children() + 1;
        debug!("released {} node(s)", released);
        released
    }
}

impl<'a> IntoIterator for &'a TrieSet {
    type Item = String;
    type IntoIter = TrieSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for TrieSet {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator for `TrieSet`.
///
/// This iterator visits the nodes of the trie depth-first with children in alphabet order and
/// yields owned words.
pub struct TrieSetIter<'a> {
    arena: &'a NodeArena<Node>,
    stack: Vec<(&'a Node, String)>,
}

impl<'a> TrieSetIter<'a> {
    fn new(arena: &'a NodeArena<Node>, start: &'a Node, prefix: String) -> Self {
        TrieSetIter {
            arena,
            stack: vec![(start, prefix)],
        }
    }
}

impl<'a> Iterator for TrieSetIter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some((node, word)) = self.stack.pop() {
            for index in (0..ALPHABET_SIZE).rev() {
                if let Some(id) = node.children[index] {
                    let mut child_word = word.clone();
                    child_word.push(index_to_char(index));
                    self.stack.push((&arena[id], child_word));
                }
            }
            if node.is_terminal {
                return Some(word);
            }
        }
        None
    }
}
