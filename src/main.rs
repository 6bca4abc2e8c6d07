extern crate simplelog;
extern crate string_index;

#[macro_use]
extern crate log;

use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use std::error::Error;
use string_index::bst::BstSet;
use string_index::trie::TrieSet;

const WORDS: [&str; 6] = ["casa", "carro", "caminhao", "arvore", "dado", "bola"];

fn found(exists: bool) -> &'static str {
    if exists {
        "found"
    } else {
        "not found"
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::init(LevelFilter::Info, LogConfig::default())?;

    info!("inserting {:?}", WORDS);

    let mut bst = BstSet::new();
    for word in &WORDS {
        bst.insert(word)?;
    }
    info!("bst in-order: {:?}", bst.inorder());
    info!("bst pre-order: {:?}", bst.preorder());
    info!("bst post-order: {:?}", bst.postorder());
    info!("bst height: {}", bst.height());
    for word in &["carro", "avião"] {
        info!("bst search {:?}: {}", word, found(bst.search(word)));
    }
    info!("bst released {} node(s)", bst.destroy());

    let mut trie = TrieSet::new();
    for word in &WORDS {
        trie.insert(word)?;
    }
    for word in &["carro", "caminh"] {
        info!("trie search {:?}: {}", word, found(trie.search(word)));
    }
    info!("trie words with prefix \"ca\": {:?}", trie.words_with_prefix("ca"));
    info!("trie released {} node(s)", trie.destroy());

    Ok(())
}
