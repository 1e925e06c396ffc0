//! Scenario tests covering single and cascading node splits, plus the
//! general properties that apply to the index (ordering, duplicate
//! rejection, invariant maintenance).

use crate::tree::validate::Shape;
use crate::tree::Tree;

#[test]
fn single_split_promotes_new_root() {
    let mut tree: Tree<i32, &'static str> = Tree::new(4);
    for key in [20, 40, 30, 10] {
        assert!(tree.insert(key, "x"));
    }
    // Root leaf now holds all four keys, unsplit.
    assert_eq!(tree.shape(), Some(Shape::Leaf(vec![10, 20, 30, 40])));

    assert!(tree.insert(25, "x"));

    assert_eq!(
        tree.shape(),
        Some(Shape::Internal(
            vec![25],
            vec![Shape::Leaf(vec![10, 20]), Shape::Leaf(vec![30, 40])],
        ))
    );
    tree.check_invariants();
}

/// Cascading splits grow the tree to height 2 with an exact final shape.
#[test]
fn cascading_split_reaches_new_root() {
    let mut tree: Tree<i32, &'static str> = Tree::new(4);
    let keys = [
        20, 40, 30, 10, 25, 21, 22, 26, 32, 11, 41, 31, 28, 29, 12, 14, 13,
    ];
    for key in keys {
        assert!(tree.insert(key, "x"));
    }

    let expected = Shape::Internal(
        vec![25],
        vec![
            Shape::Internal(
                vec![12, 20],
                vec![
                    Shape::Leaf(vec![10, 11]),
                    Shape::Leaf(vec![13, 14]),
                    Shape::Leaf(vec![21, 22]),
                ],
            ),
            Shape::Internal(
                vec![29, 32],
                vec![
                    Shape::Leaf(vec![26, 28]),
                    Shape::Leaf(vec![30, 31]),
                    Shape::Leaf(vec![40, 41]),
                ],
            ),
        ],
    );
    assert_eq!(tree.shape(), Some(expected));

    tree.check_invariants();
    let mut sorted = keys;
    sorted.sort_unstable();
    assert_eq!(tree.in_order_keys(), sorted.to_vec());

    for key in keys {
        let result = tree.get(&key);
        assert!(result.found);
        assert_eq!(result.value, Some("x"));
    }
}

/// An in-order traversal is always ascending, across a larger insert
/// sequence than the split scenarios above cover.
#[test]
fn property_in_order_traversal_is_ascending() {
    let mut tree: Tree<i32, i32> = Tree::new(3);
    let keys: Vec<i32> = (0..200).map(|i| (i * 37) % 211).collect();
    for key in &keys {
        tree.insert(*key, *key);
    }
    let order = tree.in_order_keys();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    tree.check_invariants();
}

/// Duplicate keys are rejected, whether the duplicate is a leaf value or
/// an anchor already promoted into an internal node.
#[test]
fn property_duplicate_keys_are_rejected() {
    let mut tree: Tree<i32, i32> = Tree::new(4);
    for key in [20, 40, 30, 10, 25] {
        tree.insert(key, key);
    }
    // 25 is now a separator anchor, not a leaf value.
    assert!(!tree.insert(25, 999));
    assert!(!tree.insert(10, 999));
    let result = tree.get(&25);
    assert_eq!(result.value, Some(25));
}

/// Every node in a large, repeatedly-split tree satisfies the structural
/// invariants (capacity, ascending keys, child-count, parent
/// back-references).
#[test]
fn property_every_node_satisfies_invariants() {
    for capacity in [1usize, 2, 3, 4, 7] {
        let mut tree: Tree<i32, ()> = Tree::new(capacity);
        for key in 0..150 {
            tree.insert(key, ());
        }
        tree.check_invariants();
    }
}

/// `get` on an empty tree, and on a key never inserted, reports not found.
#[test]
fn get_reports_not_found() {
    let tree: Tree<i32, i32> = Tree::new(4);
    assert_eq!(tree.get(&1), crate::LookupResult { found: false, value: None });

    let mut tree: Tree<i32, i32> = Tree::new(4);
    tree.insert(5, 50);
    assert_eq!(tree.get(&6), crate::LookupResult { found: false, value: None });
}

/// Leaf capacity 1 is legal: every insert past the first forces a split.
#[test]
fn capacity_one_is_legal() {
    let mut tree: Tree<i32, i32> = Tree::new(1);
    for key in [5, 3, 8, 1, 4] {
        assert!(tree.insert(key, key));
    }
    tree.check_invariants();
    for key in [5, 3, 8, 1, 4] {
        assert!(tree.get(&key).found);
    }
}
