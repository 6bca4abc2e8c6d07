use std::error;
use std::fmt;
use std::result;

/// Errors returned by the string indexes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A node could not be acquired, either because the node budget of the instance is exhausted
    /// or because the backing storage could not grow.
    AllocationFailure { requested: usize },
    /// The key is longer than the maximum number of bytes accepted by the instance.
    KeyTooLong { len: usize, max: usize },
    /// A trie word contains a character outside of `a-z` while the instance rejects such words.
    InvalidCharacter { character: char, position: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::AllocationFailure { requested } => {
                write!(f, "unable to allocate {} node(s)", requested)
            },
            Error::KeyTooLong { len, max } => {
                write!(f, "key of {} bytes exceeds the maximum of {} bytes", len, max)
            },
            Error::InvalidCharacter { character, position } => {
                write!(f, "invalid character {:?} at position {}", character, position)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::AllocationFailure { requested: 2 }.to_string(),
            "unable to allocate 2 node(s)",
        );
        assert_eq!(
            Error::KeyTooLong { len: 60, max: 49 }.to_string(),
            "key of 60 bytes exceeds the maximum of 49 bytes",
        );
        assert_eq!(
            Error::InvalidCharacter { character: '1', position: 3 }.to_string(),
            "invalid character '1' at position 3",
        );
    }
}
