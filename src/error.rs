//! Error types for the hufzip codec.
//!
//! Every failure is surfaced synchronously as a typed error; no function
//! returns partial output. An empty frequency table is not an error; it
//! produces the empty-tree sentinel, which callers check with
//! [`HuffmanTree::is_empty`](crate::huffman_coding::tree::HuffmanTree::is_empty).

use thiserror::Error;

/// Top-level error type for all codec operations.
#[derive(Debug, Error)]
pub enum HufError {
    /// A serialized record list is corrupt: an absolute child index points
    /// outside the list, a postorder child reference underflows record 0,
    /// the byte run is not a multiple of four, or a type byte is not 0 or 1.
    #[error("malformed record list: index {index} invalid for {len} records")]
    MalformedRecordList { index: usize, len: usize },

    /// The tree needs more internal nodes than the one-byte header count
    /// can express. Surfaced before any record bytes are produced.
    #[error("tree has {count} internal nodes, the serialized limit is 255")]
    TreeNodeOverflow { count: usize },

    /// An internal node was serialized before postorder numbering ran.
    #[error("internal node has no postorder number; number the tree first")]
    MissingNodeNumber,

    /// A byte in the input has no entry in the code table. This signals a
    /// logic defect upstream (the table was not derived from the input's
    /// frequencies), so it is fatal rather than silently skipped.
    #[error("no code for symbol {symbol}")]
    UnknownSymbol { symbol: u8 },

    /// The compressed frame or bitstream ended before the expected amount
    /// of data was recovered.
    #[error("truncated stream: expected {expected} items, got {actual}")]
    TruncatedStream { expected: usize, actual: usize },

    /// The original length does not fit the frame's 4-byte length field.
    #[error("input of {len} bytes exceeds the 4-byte length field")]
    OversizeInput { len: usize },

    /// File I/O error from the file-path wrappers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, HufError>;
