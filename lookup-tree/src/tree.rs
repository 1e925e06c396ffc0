//! The ordered index itself: `insert` with duplicate rejection and
//! split/promotion, and `get`.

use log::debug;

use crate::leaf::Leaf;
use crate::node::{Node, NodeId};

/// Result of a [`Tree::get`] lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupResult<V> {
    pub found: bool,
    pub value: Option<V>,
}

/// An in-memory ordered index with a fixed per-node leaf capacity `L`.
///
/// `L` is a constructor argument rather than a const generic: callers
/// choose it at runtime (e.g. from a config file), and nothing about the
/// algorithm needs it known at compile time.
pub struct Tree<K, V> {
    capacity: usize,
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K: Ord, V> Tree<K, V> {
    /// Creates an empty tree with leaf capacity `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero — a node that can hold nothing can
    /// never be split into two non-empty halves.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "lookup-tree: capacity must be at least 1");
        Tree {
            capacity,
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` with `value`. Returns `false` without modifying the
    /// tree if `key` is already present — either as a leaf or as a
    /// separator anchor promoted from an earlier split.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let root_id = match self.root {
            Some(id) => id,
            None => {
                let id = self.alloc(Node::new_leaf(None));
                self.nodes[id.0].leaves.push(Leaf::new(key, value));
                self.root = Some(id);
                debug!("lookup-tree: inserted first key into fresh root");
                return true;
            }
        };

        let mut current = root_id;
        loop {
            let idx = match self.nodes[current.0].leaves.binary_search_by(|l| l.key.cmp(&key)) {
                Ok(_) => return false,
                Err(idx) => idx,
            };
            if self.nodes[current.0].has_children {
                current = self.nodes[current.0].children[idx];
                continue;
            }
            return self.insert_into_leaf(current, key, value, idx);
        }
    }

    /// Looks up `key`, cloning its value out on a hit.
    pub fn get(&self, key: &K) -> LookupResult<V>
    where
        V: Clone,
    {
        let mut current = match self.root {
            Some(id) => id,
            None => return LookupResult { found: false, value: None },
        };

        loop {
            let node = &self.nodes[current.0];
            match node.leaves.binary_search_by(|l| l.key.cmp(key)) {
                Ok(pos) => {
                    return LookupResult {
                        found: true,
                        value: Some(node.leaves[pos].value.clone()),
                    }
                }
                Err(idx) => {
                    if node.has_children {
                        current = node.children[idx];
                    } else {
                        return LookupResult { found: false, value: None };
                    }
                }
            }
        }
    }

    fn insert_into_leaf(&mut self, leaf_id: NodeId, key: K, value: V, pos: usize) -> bool {
        if self.nodes[leaf_id.0].leaves.len() < self.capacity {
            self.nodes[leaf_id.0].leaves.insert(pos, Leaf::new(key, value));
            return true;
        }
        self.split_leaf(leaf_id, Leaf::new(key, value), pos);
        true
    }

    /// Index of the anchor within the overflowed `L + 1`-element buffer,
    /// which is also where the buffer is cut into a lower and upper half.
    /// For `L = 4`, a split of `[10, 20, 25, 30, 40]` promotes `25` and
    /// leaves `[10, 20]` / `[30, 40]` either side.
    fn split_point(&self) -> usize {
        self.capacity / 2 + (self.capacity % 2)
    }

    fn split_leaf(&mut self, leaf_id: NodeId, new_leaf: Leaf<K, V>, pos: usize) {
        let m = self.split_point();
        let mut leaves = std::mem::take(&mut self.nodes[leaf_id.0].leaves);
        leaves.insert(pos, new_leaf);

        let upper = leaves.split_off(m + 1);
        let anchor = leaves.pop().expect("overflowed buffer holds more than m elements");
        let lower = leaves;

        self.nodes[leaf_id.0].leaves = upper;

        let sibling_id = self.alloc(Node {
            leaves: lower,
            children: Vec::new(),
            parent: None,
            has_children: false,
        });

        debug!("lookup-tree: leaf split, promoting anchor to parent");
        self.promote(leaf_id, sibling_id, anchor);
    }

    /// Attaches `new_sibling_id` (holding the lower half produced by
    /// splitting `node_id`) and `anchor` to `node_id`'s parent, splitting
    /// that parent in turn if it is itself full, or growing the tree by
    /// one level if `node_id` was the root.
    fn promote(&mut self, node_id: NodeId, new_sibling_id: NodeId, anchor: Leaf<K, V>) {
        match self.nodes[node_id.0].parent {
            None => {
                let new_root_id = self.alloc(Node {
                    leaves: vec![anchor],
                    children: vec![new_sibling_id, node_id],
                    parent: None,
                    has_children: true,
                });
                self.nodes[new_sibling_id.0].parent = Some(new_root_id);
                self.nodes[node_id.0].parent = Some(new_root_id);
                self.root = Some(new_root_id);
                debug!("lookup-tree: root promoted, tree height increased");
            }
            Some(parent_id) => {
                self.nodes[new_sibling_id.0].parent = Some(parent_id);
                let pos = self.nodes[parent_id.0]
                    .children
                    .iter()
                    .position(|&c| c == node_id)
                    .expect("a split node is always a child of its recorded parent");

                if self.nodes[parent_id.0].leaves.len() < self.capacity {
                    self.nodes[parent_id.0].leaves.insert(pos, anchor);
                    self.nodes[parent_id.0].children.insert(pos, new_sibling_id);
                } else {
                    self.split_internal(parent_id, anchor, pos, new_sibling_id);
                }
            }
        }
    }

    /// The same split as [`Self::split_leaf`], but for an internal node:
    /// the overflow buffer carries both keys and the one extra child
    /// pointer that arrived with the promoted anchor.
    fn split_internal(&mut self, parent_id: NodeId, anchor: Leaf<K, V>, child_pos: usize, new_child_id: NodeId) {
        let m = self.split_point();
        let mut leaves = std::mem::take(&mut self.nodes[parent_id.0].leaves);
        let mut children = std::mem::take(&mut self.nodes[parent_id.0].children);

        leaves.insert(child_pos, anchor);
        children.insert(child_pos, new_child_id);

        let upper_leaves = leaves.split_off(m + 1);
        let anchor2 = leaves.pop().expect("overflowed buffer holds more than m elements");
        let lower_leaves = leaves;

        let upper_children = children.split_off(m + 1);
        let lower_children = children;

        self.nodes[parent_id.0].leaves = upper_leaves;
        self.nodes[parent_id.0].children = upper_children;
        self.reparent_children(parent_id);

        let lower_sibling_id = self.alloc(Node {
            leaves: lower_leaves,
            children: lower_children,
            parent: None,
            has_children: true,
        });
        self.reparent_children(lower_sibling_id);

        debug!("lookup-tree: internal node split, re-promoting anchor");
        self.promote(parent_id, lower_sibling_id, anchor2);
    }

    fn reparent_children(&mut self, node_id: NodeId) {
        let child_ids: Vec<NodeId> = self.nodes[node_id.0].children.clone();
        for child_id in child_ids {
            self.nodes[child_id.0].parent = Some(node_id);
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
