//! Builds an optimal prefix tree from a frequency table.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;
use rustc_hash::FxHashMap;

use super::tree::HuffmanTree;

/// A pending element in the greedy merge: a leaf or an already-merged
/// subtree, keyed by total weight and a creation sequence number.
struct QueueItem {
    weight: u64,
    seq: u32,
    tree: HuffmanTree,
}

impl Ord for QueueItem {
    /// Reversed so the max-heap pops the lightest element first; equal
    /// weights fall back to creation order.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}
impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl Eq for QueueItem {}

/// Build the Huffman tree for a frequency table by repeatedly merging the two
/// lightest elements until one remains.
///
/// Tie-break rule: the priority queue orders by `(weight, sequence)`. Leaves
/// are seeded in ascending symbol order with sequence numbers 0..n, and every
/// merged node takes the next sequence number, so equal weights resolve to the
/// earliest-created element: lower symbol values and older merges first. The
/// lighter of each merged pair becomes the left child. The rule is arbitrary
/// but fixed: the same frequency table always yields the same tree.
///
/// An empty table yields the empty-tree sentinel. A table with exactly one
/// symbol `s` has no meaningful binary tree, so a dummy sibling holding
/// `(s + 1) mod 256` is synthesized to keep the codes one bit wide; the dummy
/// cannot collide with a real symbol because this branch only fires when `s`
/// is the table's sole entry.
pub fn build_huffman_tree(freq_table: &FxHashMap<u8, u32>) -> HuffmanTree {
    if freq_table.is_empty() {
        return HuffmanTree::empty();
    }
    if freq_table.len() == 1 {
        let symbol = *freq_table.keys().next().unwrap_or(&0);
        trace!("single-symbol table, pairing {} with a dummy leaf", symbol);
        return HuffmanTree::internal(
            HuffmanTree::leaf(symbol),
            HuffmanTree::leaf(symbol.wrapping_add(1)),
        );
    }

    // Seed the queue with one leaf per symbol, in ascending symbol order so
    // the sequence numbers (and with them the tie-break) are deterministic.
    let mut symbols: Vec<(u8, u32)> = freq_table.iter().map(|(&s, &f)| (s, f)).collect();
    symbols.sort_unstable();

    let mut seq = 0_u32;
    let mut queue: BinaryHeap<QueueItem> = symbols
        .into_iter()
        .map(|(symbol, weight)| {
            let item = QueueItem {
                weight: weight as u64,
                seq,
                tree: HuffmanTree::leaf(symbol),
            };
            seq += 1;
            item
        })
        .collect();

    // Merge the two lightest elements until one tree remains. The loop always
    // terminates: each pass removes two elements and adds one.
    while queue.len() > 1 {
        let left = match queue.pop() {
            Some(item) => item,
            None => break,
        };
        let right = match queue.pop() {
            Some(item) => item,
            None => break,
        };
        queue.push(QueueItem {
            weight: left.weight + right.weight,
            seq,
            tree: HuffmanTree::internal(left.tree, right.tree),
        });
        seq += 1;
    }

    match queue.pop() {
        Some(item) => item.tree,
        None => HuffmanTree::empty(),
    }
}
