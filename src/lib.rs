//! Ordered binary search tree and prefix trie indexes over bounded string keys.

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod arena;
pub mod bst;
pub mod config;
pub mod error;
pub mod index;
pub mod key;
pub mod trie;

pub use crate::bst::BstSet;
pub use crate::config::{Config, InvalidCharPolicy};
pub use crate::error::{Error, Result};
pub use crate::index::StringIndex;
pub use crate::key::Key;
pub use crate::trie::TrieSet;
