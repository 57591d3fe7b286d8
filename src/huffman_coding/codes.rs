//! Derives the symbol-to-bits code table from a tree, and the weighted mean
//! code length used to report compression effectiveness.

use rustc_hash::FxHashMap;

use super::tree::{HuffmanTree, NodeData};

/// Return the code table for a tree: each leaf symbol mapped to its
/// root-to-leaf path, '0' per left edge and '1' per right edge. Codes are
/// prefix-free by construction since only leaves carry symbols. An empty tree
/// yields an empty table.
pub fn get_codes(tree: &HuffmanTree) -> FxHashMap<u8, String> {
    let mut codes = FxHashMap::default();
    if !tree.is_empty() {
        collect_codes(tree, String::new(), &mut codes);
    }
    codes
}

fn collect_codes(tree: &HuffmanTree, path: String, codes: &mut FxHashMap<u8, String>) {
    match &tree.node_data {
        NodeData::Kids(left, right) => {
            let mut left_path = path.clone();
            left_path.push('0');
            collect_codes(left, left_path, codes);
            let mut right_path = path;
            right_path.push('1');
            collect_codes(right, right_path, codes);
        }
        NodeData::Leaf(symbol) => {
            codes.insert(*symbol, path);
        }
        NodeData::Empty => {}
    }
}

/// Return the average number of bits per symbol needed to encode data with
/// the given frequencies through this tree: the frequency-weighted sum of
/// code lengths divided by the total frequency. Symbols present in only one
/// of the two inputs are ignored; an empty frequency table (or one with no
/// overlap with the tree) yields 0.0.
pub fn avg_length(tree: &HuffmanTree, freq_table: &FxHashMap<u8, u32>) -> f64 {
    let codes = get_codes(tree);

    let mut total_freq = 0_u64;
    let mut weighted_bits = 0_u64;
    for (symbol, freq) in freq_table {
        if let Some(code) = codes.get(symbol) {
            total_freq += *freq as u64;
            weighted_bits += *freq as u64 * code.len() as u64;
        }
    }

    if total_freq == 0 {
        return 0.0;
    }
    weighted_bits as f64 / total_freq as f64
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::build::build_huffman_tree;
    use crate::tools::freq_count::build_frequency_table;

    #[test]
    fn two_leaf_codes_test() {
        let tree = HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(2));
        let codes = get_codes(&tree);
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[&3], "0");
        assert_eq!(codes[&2], "1");
    }

    #[test]
    fn empty_tree_codes_test() {
        assert!(get_codes(&HuffmanTree::empty()).is_empty());
    }

    #[test]
    fn nested_codes_test() {
        let tree = HuffmanTree::internal(
            HuffmanTree::leaf(2),
            HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(7)),
        );
        let codes = get_codes(&tree);
        assert_eq!(codes[&2], "0");
        assert_eq!(codes[&3], "10");
        assert_eq!(codes[&7], "11");
    }

    #[test]
    fn prefix_free_test() {
        let freqs = build_frequency_table(b"the quick brown fox jumps over the lazy dog");
        let codes = get_codes(&build_huffman_tree(&freqs));
        for (a, code_a) in &codes {
            for (b, code_b) in &codes {
                if a != b {
                    assert!(
                        !code_b.starts_with(code_a.as_str()),
                        "code for {} is a prefix of code for {}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn avg_length_example_test() {
        // (2*2 + 7*2 + 1*1) / (2 + 7 + 1) = 1.9
        let left = HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(2));
        let tree = HuffmanTree::internal(left, HuffmanTree::leaf(9));
        let freqs = [(3_u8, 2_u32), (2, 7), (9, 1)].into_iter().collect();
        assert_eq!(avg_length(&tree, &freqs), 1.9);
    }

    #[test]
    fn avg_length_ignores_unknown_symbols_test() {
        let tree = HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(2));
        let freqs = [(3_u8, 1_u32), (2, 1), (200, 50)].into_iter().collect();
        assert_eq!(avg_length(&tree, &freqs), 1.0);
    }

    #[test]
    fn avg_length_empty_freqs_test() {
        let tree = HuffmanTree::internal(HuffmanTree::leaf(3), HuffmanTree::leaf(2));
        assert_eq!(avg_length(&tree, &FxHashMap::default()), 0.0);
    }
}
