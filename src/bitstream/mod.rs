//! The bitstream module converts between bit-level codes and byte buffers for hufzip.
//!
//! Huffman codes are variable-length bit sequences, so the codec never deals in
//! whole bytes until the very edges of the pipeline. This module owns those edges:
//!
//! - bitpacker: accumulates '0'/'1' code strings and emits packed bytes, zero-padding
//!   the final partial byte on the right.
//! - bitreader: reads a packed byte source bit by bit, most significant bit first.
//!
//! Both sides agree that the first bit written is the most significant bit of the
//! first byte, which is what makes a compressed stream byte-for-byte reproducible.

pub mod bitpacker;
pub mod bitreader;
