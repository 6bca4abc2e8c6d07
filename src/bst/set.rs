use crate::bst::traversal::{Order, Traversal};
use crate::bst::tree::{self, Tree};
use crate::bst::node::Node;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::key::{self, Key};

/// An ordered set of string keys implemented using an unbalanced binary search tree.
///
/// Keys are compared byte-wise. The tree is never rebalanced, so its shape depends on the order
/// in which keys are inserted: inserting keys in sorted order produces a tree whose height equals
/// its length. Inserting a key that already exists is a no-op.
///
/// # Examples
///
/// ```
/// use string_index::bst::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert("casa").unwrap();
/// set.insert("carro").unwrap();
/// set.insert("dado").unwrap();
///
/// assert_eq!(set.len(), 3);
/// assert!(set.search("carro"));
/// assert!(!set.search("car"));
///
/// assert_eq!(set.inorder(), vec!["carro", "casa", "dado"]);
/// assert_eq!(set.preorder(), vec!["casa", "carro", "dado"]);
/// assert_eq!(set.postorder(), vec!["carro", "dado", "casa"]);
///
/// assert_eq!(set.destroy(), 3);
/// ```
pub struct BstSet {
    tree: Tree,
    len: usize,
    config: Config,
}

impl BstSet {
    /// Constructs a new, empty `BstSet` with the default `Config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::BstSet;
    ///
    /// let set = BstSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Constructs a new, empty `BstSet` with a specific `Config`. Only `max_key_len` and
    /// `max_nodes` apply to binary search trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::BstSet;
    /// use string_index::config::Config;
    ///
    /// let mut set = BstSet::with_config(Config::default().max_nodes(Some(1)));
    /// assert_eq!(set.insert("casa"), Ok(true));
    /// assert!(set.insert("dado").is_err());
    /// ```
    pub fn with_config(config: Config) -> Self {
        BstSet {
            tree: None,
            len: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Inserts a key into the set. Returns `Ok(true)` if the key was added and `Ok(false)` if the
    /// key already existed, in which case the set is unchanged.
    ///
    /// Returns `Error::KeyTooLong` if the key is longer than the configured maximum and
    /// `Error::AllocationFailure` if the set already holds `max_nodes` keys. The set is unchanged
    /// on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.insert("casa"), Ok(true));
    /// assert_eq!(set.insert("casa"), Ok(false));
    /// assert!(set.insert(&"a".repeat(50)).is_err());
    /// ```
    pub fn insert(&mut self, key: &str) -> Result<bool> {
        let key = Key::with_max_len(key, self.config.max_key_len)?;
        self.insert_key(key)
    }

    /// Inserts an already constructed `Key` into the set. The key is still checked against the
    /// maximum key length of this set.
    pub fn insert_key(&mut self, key: Key) -> Result<bool> {
        key::check_len(key.as_str(), self.config.max_key_len)?;

        let slot = match tree::vacant_slot(&mut self.tree, key.as_str()) {
            Some(slot) => slot,
            None => {
                trace!("ignoring duplicate key {:?}", key.as_str());
                return Ok(false);
            },
        };

        if let Some(max_nodes) = self.config.max_nodes {
            if self.len >= max_nodes {
                warn!("refusing to insert {:?}: node limit of {} reached", key.as_str(), max_nodes);
                return Err(Error::AllocationFailure { requested: 1 });
            }
        }

        debug!("inserting key {:?} as node {}", key.as_str(), self.len + 1);
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
        Ok(true)
    }

    /// Returns `true` if the key exists in the set. Keys that could never have been inserted,
    /// such as keys longer than the maximum key length, are reported as missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert("carro").unwrap();
    /// assert!(set.search("carro"));
    /// assert!(!set.search("avião"));
    /// ```
    pub fn search(&self, key: &str) -> bool {
        key.len() <= self.config.max_key_len && tree::contains(&self.tree, key)
    }

    /// Alias of `search`.
    pub fn contains(&self, key: &str) -> bool {
        self.search(key)
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. Returns `0` if the
    /// set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// for key in &["a", "b", "c"] {
    ///     set.insert(key).unwrap();
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&str> {
        tree::min(&self.tree).map(Key::as_str)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&str> {
        tree::max(&self.tree).map(Key::as_str)
    }

    /// Returns an iterator over the keys of the set in a specific order.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::{BstSet, Order};
    ///
    /// let mut set = BstSet::new();
    /// set.insert("b").unwrap();
    /// set.insert("a").unwrap();
    ///
    /// let mut iterator = set.traversal(Order::PostOrder);
    /// assert_eq!(iterator.next(), Some("a"));
    /// assert_eq!(iterator.next(), Some("b"));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn traversal(&self, order: Order) -> Traversal {
        Traversal::new(&self.tree, order)
    }

    /// Returns the keys of the set in a specific order.
    pub fn traverse(&self, order: Order) -> Vec<&str> {
        self.traversal(order).collect()
    }

    pub fn preorder(&self) -> Vec<&str> {
        self.traverse(Order::PreOrder)
    }

    /// Returns the keys of the set in ascending order.
    pub fn inorder(&self) -> Vec<&str> {
        self.traverse(Order::InOrder)
    }

    pub fn postorder(&self) -> Vec<&str> {
        self.traverse(Order::PostOrder)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> Traversal {
        self.traversal(Order::InOrder)
    }

    /// Clears the set, releasing every node in post-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::bst::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert("a").unwrap();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let released = tree::destroy(self.tree.take());
        debug!("released {} node(s)", released);
        self.len = 0;
    }

    /// Destroys the set, releasing every node exactly once with children released before their
    /// parent. Returns the number of released nodes.
    pub fn destroy(mut self) -> usize {
        let released = tree::destroy(self.tree.take());
        debug!("released {} node(s)", released);
        self.len = 0;
        released
    }
}

impl<'a> IntoIterator for &'a BstSet {
    type Item = &'a str;
    type IntoIter = Traversal<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for BstSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BstSet {
    fn drop(&mut self) {
        tree::destroy(self.tree.take());
    }
}
