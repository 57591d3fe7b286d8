//! hufzip: a byte-oriented Huffman compression codec.
//!
//! Provides safe compression and decompression of byte buffers and files
//! using a canonical Huffman prefix code. The coding tree is serialized into
//! the compressed output (in a compact 4-byte-per-node record form), so a
//! compressed file is self-describing apart from its own length.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufzip test.txt`
//!
//! This will compress the file and create the file test.txt.huf. Decompress
//! it again with:
//!
//! `$> hufzip -d test.txt.huf`
//!
//! The buffer-level entry points are
//! [`compress_buffer`](compression::compress::compress_buffer) and
//! [`decompress_buffer`](compression::decompress::decompress_buffer); the
//! stages they are built from (frequency analysis, tree construction, code
//! derivation, tree serialization, bit packing) are all public for callers
//! that need only part of the pipeline.

#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{HufError, Result};
