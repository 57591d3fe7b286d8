//! The compression module manages both directions of the hufzip pipeline.
//!
//! Compression happens in the following steps:
//! - Frequency analysis: count every byte value in the input.
//! - Tree construction: greedily merge the two lightest elements until one
//!   optimal prefix tree remains (optionally followed by the leaf improvement
//!   pass).
//! - Code derivation: read each symbol's bit code off its root-to-leaf path.
//! - Encoding: replace every input byte with its code and pack the bits into
//!   output bytes, zero-padding the final byte.
//!
//! The compressed file carries everything needed to reverse the process: a
//! one-byte count of tree records, the serialized tree, the original length,
//! and the packed bitstream. Decompression rebuilds the tree from the
//! records, then walks it bit by bit until exactly the original number of
//! symbols has been recovered. The trailing pad bits must never be decoded,
//! and the stored length is what makes them distinguishable from real codes.
//!
//! - codec: the buffer-level encode/decode against a code table or tree.
//! - compress: frame assembly and the file-path wrapper.
//! - decompress: frame parsing and the file-path wrapper.

pub mod codec;
pub mod compress;
pub mod decompress;
