use rand::Rng;
use std::collections::BTreeSet;
use string_index::bst::{BstSet, Order};

const NUM_OF_OPERATIONS: usize = 10_000;

fn random_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(1, 12);
    (0..len).map(|_| rng.gen_range(b'a', b'z' + 1) as char).collect()
}

#[test]
fn int_test_bst_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BstSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let word = random_word(&mut rng);
        assert_eq!(set.insert(&word), Ok(expected.insert(word.clone())));
    }

    assert_eq!(set.len(), expected.len());
    assert_eq!(
        set.inorder(),
        expected.iter().map(String::as_str).collect::<Vec<&str>>(),
    );
    assert_eq!(set.min(), expected.iter().next().map(String::as_str));
    assert_eq!(set.max(), expected.iter().next_back().map(String::as_str));

    for word in &expected {
        assert!(set.search(word));
    }

    for _ in 0..NUM_OF_OPERATIONS {
        let word = random_word(&mut rng);
        assert_eq!(set.search(&word), expected.contains(&word));
    }

    assert_eq!(set.destroy(), expected.len());
}

#[test]
fn int_test_bst_traversal_orders() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut set = BstSet::new();
    for _ in 0..1_000 {
        set.insert(&random_word(&mut rng)).unwrap();
    }

    let inorder = set.inorder();
    assert!(inorder.windows(2).all(|pair| pair[0] < pair[1]));

    // every key is preceded by its ancestors in pre-order and followed by them in post-order
    let preorder = set.preorder();
    let postorder = set.postorder();
    assert_eq!(preorder.len(), inorder.len());
    assert_eq!(postorder.len(), inorder.len());
    assert_eq!(preorder.first(), postorder.last());

    let mut sorted_preorder = preorder.clone();
    sorted_preorder.sort();
    assert_eq!(sorted_preorder, inorder);

    let mut sorted_postorder = postorder.clone();
    sorted_postorder.sort();
    assert_eq!(sorted_postorder, inorder);

    assert_eq!(set.traversal(Order::PreOrder).count(), set.len());
}

#[test]
fn int_test_bst_degenerate_tree() {
    let mut set = BstSet::new();
    for i in 0..NUM_OF_OPERATIONS {
        assert_eq!(set.insert(&format!("{:08}", i)), Ok(true));
    }

    assert_eq!(set.height(), NUM_OF_OPERATIONS);
    assert_eq!(set.inorder().len(), NUM_OF_OPERATIONS);
    assert_eq!(set.preorder(), set.inorder());
    assert_eq!(set.postorder().first(), Some(&"00009999"));
    assert!(set.search("00004242"));
    drop(set);
}

#[test]
fn int_test_bst_duplicates_keep_traversal() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
    let mut set = BstSet::new();
    let mut words = Vec::new();
    for _ in 0..1_000 {
        let word = random_word(&mut rng);
        set.insert(&word).unwrap();
        words.push(word);
    }

    let before = set.inorder().into_iter().map(String::from).collect::<Vec<String>>();
    rng.shuffle(&mut words);
    for word in &words {
        assert_eq!(set.insert(word), Ok(false));
    }
    assert_eq!(set.inorder(), before);
}
