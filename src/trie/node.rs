use crate::arena::NodeId;

/// The number of letters in the trie alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Maps a character to its position in the alphabet after folding it to lowercase. Returns
/// `None` if the character is not an ASCII letter.
///
/// # Examples
///
/// ```
/// use string_index::trie::char_to_index;
///
/// assert_eq!(char_to_index('a'), Some(0));
/// assert_eq!(char_to_index('Z'), Some(25));
/// assert_eq!(char_to_index('ã'), None);
/// ```
pub fn char_to_index(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Maps a position in the alphabet back to its lowercase letter.
///
/// # Panics
///
/// Panics if `index` is not less than `ALPHABET_SIZE`.
pub fn index_to_char(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "Error: alphabet index out of bounds.");
    (b'a' + index as u8) as char
}

/// A struct representing a node of a trie.
pub struct Node {
    pub children: [Option<NodeId>; ALPHABET_SIZE],
    pub is_terminal: bool,
}

impl Node {
    pub fn new() -> Self {
        Node {
            children: [None; ALPHABET_SIZE],
            is_terminal: false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}
