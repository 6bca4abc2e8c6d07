//! Bounded, owned string keys.

use crate::error::{Error, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// The default maximum length of a key in bytes.
pub const DEFAULT_MAX_KEY_LEN: usize = 49;

/// An owned string whose length in bytes is bounded.
///
/// Keys compare byte-wise, so the ordering of two keys is the same ordering that `strcmp` yields
/// for their UTF-8 encodings. Keys are validated once when they are constructed and are never
/// truncated.
///
/// # Examples
///
/// ```
/// use string_index::key::Key;
///
/// let key = Key::new("casa").unwrap();
/// assert_eq!(key.as_str(), "casa");
/// assert!(Key::new(&"a".repeat(50)).is_err());
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Key(String);

impl Key {
    /// Constructs a new key bounded by `DEFAULT_MAX_KEY_LEN` bytes.
    pub fn new(key: &str) -> Result<Self> {
        Self::with_max_len(key, DEFAULT_MAX_KEY_LEN)
    }

    /// Constructs a new key bounded by `max_len` bytes. Returns `Error::KeyTooLong` if the key is
    /// longer than `max_len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::error::Error;
    /// use string_index::key::Key;
    ///
    /// assert!(Key::with_max_len("dado", 4).is_ok());
    /// assert_eq!(
    ///     Key::with_max_len("dados", 4),
    ///     Err(Error::KeyTooLong { len: 5, max: 4 }),
    /// );
    /// ```
    pub fn with_max_len(key: &str, max_len: usize) -> Result<Self> {
        check_len(key, max_len)?;
        Ok(Key(key.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Returns `Error::KeyTooLong` if `key` is longer than `max_len` bytes.
pub fn check_len(key: &str, max_len: usize) -> Result<()> {
    if key.len() > max_len {
        return Err(Error::KeyTooLong { len: key.len(), max: max_len });
    }
    Ok(())
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        check_len(&key, DEFAULT_MAX_KEY_LEN).map_err(de::Error::custom)?;
        Ok(Key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::{Key, DEFAULT_MAX_KEY_LEN};
    use crate::error::Error;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_new() {
        let key = Key::new("arvore").unwrap();
        assert_eq!(key.as_str(), "arvore");
        assert_eq!(key.len(), 6);
        assert!(!key.is_empty());
    }

    #[test]
    fn test_max_len_boundary() {
        let key = "a".repeat(DEFAULT_MAX_KEY_LEN);
        assert!(Key::new(&key).is_ok());

        let key = "a".repeat(DEFAULT_MAX_KEY_LEN + 1);
        assert_eq!(
            Key::new(&key),
            Err(Error::KeyTooLong { len: 50, max: 49 }),
        );
    }

    #[test]
    fn test_len_counts_bytes() {
        assert_eq!(Key::new("avião").unwrap().len(), 6);
        assert!(Key::with_max_len("avião", 5).is_err());
    }

    #[test]
    fn test_ordering_is_bytewise() {
        assert!(Key::new("Zebra").unwrap() < Key::new("abacaxi").unwrap());
        assert!(Key::new("carro").unwrap() < Key::new("casa").unwrap());
        assert!(Key::new("cas").unwrap() < Key::new("casa").unwrap());
        assert!(Key::new("avi").unwrap() < Key::new("avião").unwrap());
    }

    #[test]
    fn test_serde() {
        assert_tokens(&Key::new("bola").unwrap(), &[Token::Str("bola")]);
    }

    #[test]
    fn test_deserialize_too_long() {
        assert_de_tokens_error::<Key>(
            &[Token::Str("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")],
            "key of 50 bytes exceeds the maximum of 49 bytes",
        );
    }
}
