//! The stream codec: applies a code table to a byte buffer and reverses it
//! with the tree and the original symbol count.

use log::trace;
use rustc_hash::FxHashMap;

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HufError, Result};
use crate::huffman_coding::tree::{HuffmanTree, NodeData};

/// Encode a byte buffer through a code table: each byte's code is appended to
/// one long bitstream, packed eight bits at a time, with the final partial
/// byte zero-padded on the right.
///
/// Every input byte must have a code. A missing entry means the table was not
/// derived from this input's frequencies, which is a defect upstream, so it
/// is surfaced as [`HufError::UnknownSymbol`] rather than skipped.
pub fn compress_bytes(data: &[u8], codes: &FxHashMap<u8, String>) -> Result<Vec<u8>> {
    let mut packer = BitPacker::new(data.len() / 2 + 1);
    for byte in data {
        let code = codes
            .get(byte)
            .ok_or(HufError::UnknownSymbol { symbol: *byte })?;
        packer.push_code(code);
    }
    packer.flush();
    trace!(
        "packed {} symbols into {} bytes ({} pad bits)",
        data.len(),
        packer.output.len(),
        (8 - packer.last_bits) % 8
    );
    Ok(packer.output)
}

/// Decode `size` symbols from a packed buffer by walking the tree: 0 steps
/// left, 1 steps right, and reaching a leaf emits its symbol and restarts the
/// walk at the root.
///
/// Decoding stops after exactly `size` symbols. The stop count is mandatory,
/// not an optimization: the stream's trailing pad bits are indistinguishable
/// from the start of a valid code, so reading until the bits run out would
/// fabricate symbols. Running out of bits early is corrupt input and fails
/// with [`HufError::TruncatedStream`]; the empty tree decodes to nothing.
pub fn decompress_bytes(tree: &HuffmanTree, data: &[u8], size: usize) -> Result<Vec<u8>> {
    if tree.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = BitReader::new(data);
    let mut out = Vec::with_capacity(size);
    let mut node = tree;
    while out.len() < size {
        match &node.node_data {
            NodeData::Leaf(symbol) => {
                out.push(*symbol);
                node = tree;
            }
            NodeData::Kids(left, right) => {
                let bit = reader.bool_bit().ok_or(HufError::TruncatedStream {
                    expected: size,
                    actual: out.len(),
                })?;
                node = if bit { right.as_ref() } else { left.as_ref() };
            }
            // A sentinel below the root never comes out of the builder or
            // the deserializers; nothing can be decoded through it.
            NodeData::Empty => {
                return Err(HufError::TruncatedStream {
                    expected: size,
                    actual: out.len(),
                })
            }
        }
    }
    Ok(out)
}
