//! The huffman_coding module owns the prefix-code tree at the heart of hufzip.
//!
//! Compression builds an optimal binary tree from byte frequencies, derives a
//! bit-string code per symbol from the tree's shape, and writes the tree itself
//! into the output so decompression can rebuild it. The module is split by
//! lifecycle stage:
//!
//! - tree: the node type, structural equality, and postorder numbering.
//! - build: the greedy lowest-two-weights merge that constructs the tree.
//! - codes: deriving the symbol-to-bits table and the weighted mean code length.
//! - serialize: the 4-byte node-record wire form, with both the general
//!   (absolute index) and postorder (implicit index) reconstruction schemes.
//! - improve: reassigning leaf symbols within a fixed shape so heavier symbols
//!   sit closer to the root.
//!
//! Encoding and decoding of the data stream itself lives in the compression
//! module; this one never touches payload bytes.

pub mod build;
pub mod codes;
pub mod improve;
pub mod serialize;
pub mod tree;
