//! Per-instance limits and policies shared by the string indexes.

use crate::key::DEFAULT_MAX_KEY_LEN;

/// Determines what an operation does with a character outside of the trie alphabet.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum InvalidCharPolicy {
    /// Ignore the character and continue with the next one.
    Skip,
    /// Abort the operation. Inserts fail with `Error::InvalidCharacter` and searches report that
    /// the word does not exist.
    Reject,
}

/// Configuration of a `BstSet` or a `TrieSet`.
///
/// The default configuration bounds keys to `DEFAULT_MAX_KEY_LEN` bytes, does not limit the
/// number of nodes, skips invalid characters on trie inserts and rejects them on trie searches.
///
/// # Examples
///
/// ```
/// use string_index::config::{Config, InvalidCharPolicy};
///
/// let config = Config::default()
///     .max_key_len(16)
///     .max_nodes(Some(1024))
///     .insert_policy(InvalidCharPolicy::Reject);
///
/// assert_eq!(config.max_key_len, 16);
/// assert_eq!(config.search_policy, InvalidCharPolicy::Reject);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum length of a key in bytes.
    pub max_key_len: usize,
    /// Maximum number of live nodes. `None` means the instance is only limited by memory.
    pub max_nodes: Option<usize>,
    /// Policy for invalid characters when inserting into a trie.
    pub insert_policy: InvalidCharPolicy,
    /// Policy for invalid characters when searching a trie.
    pub search_policy: InvalidCharPolicy,
}

impl Config {
    pub fn max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    pub fn max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn insert_policy(mut self, policy: InvalidCharPolicy) -> Self {
        self.insert_policy = policy;
        self
    }

    pub fn search_policy(mut self, policy: InvalidCharPolicy) -> Self {
        self.search_policy = policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            max_nodes: None,
            insert_policy: InvalidCharPolicy::Skip,
            search_policy: InvalidCharPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, InvalidCharPolicy};
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.max_key_len, 49);
        assert_eq!(config.max_nodes, None);
        assert_eq!(config.insert_policy, InvalidCharPolicy::Skip);
        assert_eq!(config.search_policy, InvalidCharPolicy::Reject);
    }

    #[test]
    fn test_serde() {
        let config = Config::default().max_nodes(Some(8));
        assert_tokens(
            &config,
            &[
                Token::Struct { name: "Config", len: 4 },
                Token::Str("max_key_len"),
                Token::U64(49),
                Token::Str("max_nodes"),
                Token::Some,
                Token::U64(8),
                Token::Str("insert_policy"),
                Token::UnitVariant { name: "InvalidCharPolicy", variant: "Skip" },
                Token::Str("search_policy"),
                Token::UnitVariant { name: "InvalidCharPolicy", variant: "Reject" },
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_missing_fields() {
        assert_de_tokens(
            &Config::default().max_key_len(10),
            &[
                Token::Struct { name: "Config", len: 1 },
                Token::Str("max_key_len"),
                Token::U64(10),
                Token::StructEnd,
            ],
        );
    }
}
