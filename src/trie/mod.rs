//! Prefix tree over the lowercase ASCII alphabet where every node has one child slot per letter.

mod node;
mod set;

pub use self::node::{char_to_index, index_to_char, ALPHABET_SIZE};
pub use self::set::{TrieSet, TrieSetIter};
