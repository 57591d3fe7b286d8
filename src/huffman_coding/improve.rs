//! Reassigns leaf symbols within a fixed tree shape so that heavier symbols
//! land on shallower leaves.
//!
//! This is a post-build heuristic, not a rebuild: the shape (and therefore
//! the set of code lengths) is untouched, only which symbol owns which leaf
//! changes. Because the code table is derived from the tree, callers must
//! regenerate codes after improving.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::codes::get_codes;
use super::tree::{HuffmanTree, NodeData};

/// Reassign the tree's leaf symbols against a frequency table, without
/// changing the tree's shape.
///
/// The assignment pool holds every symbol present in both the tree and the
/// frequency table, sorted ascending by `(frequency, symbol)` (the symbol
/// value is the deterministic tie-break) and is consumed front to back, so
/// the globally least frequent symbol is placed first. Traversal recurses
/// into deeper internal nodes before assigning, which hands the lightest
/// symbols to the deepest leaves. Whether the left or the right subtree is
/// walked first follows the taller side of the root: left-first when
/// `height(left) >= height(right)`, right-first otherwise. The height
/// comparison is a compatibility-preserved heuristic, not an optimality
/// argument.
///
/// If the frequency table is missing symbols the tree holds, the pool runs
/// dry early and the remaining leaves keep their symbols. Leaf-only and
/// empty trees are left untouched.
pub fn improve_tree(tree: &mut HuffmanTree, freq_table: &FxHashMap<u8, u32>) {
    let (left_height, right_height) = match &tree.node_data {
        NodeData::Kids(left, right) => (left.height(), right.height()),
        _ => return,
    };

    let codes = get_codes(tree);
    let mut pool: Vec<(u32, u8)> = codes
        .keys()
        .filter_map(|symbol| freq_table.get(symbol).map(|&freq| (freq, *symbol)))
        .collect();
    pool.sort_unstable();
    let mut pool: VecDeque<(u32, u8)> = pool.into();

    if left_height >= right_height {
        assign_left_first(tree, &mut pool);
    } else {
        assign_right_first(tree, &mut pool);
    }
}

/// Walk left subtree, then right subtree, then hand the next pool symbols to
/// this node's leaf children, left leaf before right leaf.
fn assign_left_first(tree: &mut HuffmanTree, pool: &mut VecDeque<(u32, u8)>) {
    if let NodeData::Kids(left, right) = &mut tree.node_data {
        if !left.is_leaf() {
            assign_left_first(left, pool);
        }
        if !right.is_leaf() {
            assign_left_first(right, pool);
        }
        assign_leaf(left, pool);
        assign_leaf(right, pool);
    }
}

/// Mirror of [`assign_left_first`] that walks the right subtree before the
/// left; leaf children are still assigned left before right.
fn assign_right_first(tree: &mut HuffmanTree, pool: &mut VecDeque<(u32, u8)>) {
    if let NodeData::Kids(left, right) = &mut tree.node_data {
        if !right.is_leaf() {
            assign_right_first(right, pool);
        }
        if !left.is_leaf() {
            assign_right_first(left, pool);
        }
        assign_leaf(left, pool);
        assign_leaf(right, pool);
    }
}

fn assign_leaf(node: &mut HuffmanTree, pool: &mut VecDeque<(u32, u8)>) {
    if node.is_leaf() {
        if let Some((_, symbol)) = pool.pop_front() {
            node.node_data = NodeData::Leaf(symbol);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::codes::avg_length;

    fn table(entries: &[(u8, u32)]) -> FxHashMap<u8, u32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn right_first_example_test() {
        // The right subtree is taller, so assignment runs right-first and the
        // deepest pair takes the two lightest symbols. Mean code length drops
        // from 2.49 to 2.31.
        let left = HuffmanTree::internal(HuffmanTree::leaf(99), HuffmanTree::leaf(100));
        let right = HuffmanTree::internal(
            HuffmanTree::leaf(101),
            HuffmanTree::internal(HuffmanTree::leaf(97), HuffmanTree::leaf(98)),
        );
        let mut tree = HuffmanTree::internal(left, right);
        let freqs = table(&[(97, 26), (98, 23), (99, 20), (100, 16), (101, 15)]);

        assert_eq!(avg_length(&tree, &freqs), 2.49);
        improve_tree(&mut tree, &freqs);
        assert_eq!(avg_length(&tree, &freqs), 2.31);
    }

    #[test]
    fn left_first_example_test() {
        // Taller left subtree: its depth-3 leaves receive the two lightest
        // symbols, the shallow leaves the heaviest.
        let left = HuffmanTree::internal(
            HuffmanTree::internal(HuffmanTree::leaf(10), HuffmanTree::leaf(20)),
            HuffmanTree::leaf(30),
        );
        let right = HuffmanTree::internal(HuffmanTree::leaf(40), HuffmanTree::leaf(50));
        let mut tree = HuffmanTree::internal(left, right);
        let freqs = table(&[(10, 5), (20, 4), (30, 3), (40, 2), (50, 1)]);

        assert_eq!(avg_length(&tree, &freqs), 39.0 / 15.0);
        improve_tree(&mut tree, &freqs);
        assert_eq!(avg_length(&tree, &freqs), 33.0 / 15.0);

        let expected = HuffmanTree::internal(
            HuffmanTree::internal(
                HuffmanTree::internal(HuffmanTree::leaf(50), HuffmanTree::leaf(40)),
                HuffmanTree::leaf(30),
            ),
            HuffmanTree::internal(HuffmanTree::leaf(20), HuffmanTree::leaf(10)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn equal_frequency_tie_test() {
        // Equal frequencies resolve by symbol value, lowest first.
        let mut tree = HuffmanTree::internal(HuffmanTree::leaf(9), HuffmanTree::leaf(4));
        improve_tree(&mut tree, &table(&[(9, 1), (4, 1)]));
        assert_eq!(
            tree,
            HuffmanTree::internal(HuffmanTree::leaf(4), HuffmanTree::leaf(9))
        );
    }

    #[test]
    fn pool_underrun_test() {
        // The frequency table knows nothing about symbol 2, so only one pool
        // entry exists; the second leaf keeps its symbol.
        let mut tree = HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(2));
        improve_tree(&mut tree, &table(&[(3, 7)]));
        assert_eq!(
            tree,
            HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(2))
        );
    }

    #[test]
    fn leaf_and_empty_are_untouched_test() {
        let mut leaf = HuffmanTree::leaf(65);
        improve_tree(&mut leaf, &table(&[(65, 1)]));
        assert_eq!(leaf, HuffmanTree::leaf(65));

        let mut empty = HuffmanTree::empty();
        improve_tree(&mut empty, &table(&[(65, 1)]));
        assert!(empty.is_empty());
    }
}
