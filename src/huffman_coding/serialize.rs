//! The 4-byte node-record wire form of a tree, and its two reconstruction
//! schemes.
//!
//! A tree is persisted as one record per internal node, written in postorder.
//! Each record holds a type/data byte pair per child: type 0 means the data
//! byte is a literal leaf symbol, type 1 means the child is another internal
//! node. How a type-1 reference is resolved depends on the scheme:
//!
//! - general addressing: the data byte is an absolute index into the record
//!   list, so records may appear in any order.
//! - postorder addressing: the data byte is ignored; a node's right subtree
//!   ends in the record immediately before it, with the left subtree packed
//!   immediately before that. Postorder emission makes both positions
//!   deducible, so the reference is implicit.
//!
//! Either scheme rebuilds a tree structurally equal to the serialized one.

use log::trace;

use crate::error::{HufError, Result};

use super::tree::{HuffmanTree, NodeData};

/// Bytes per serialized internal node.
pub const RECORD_SIZE: usize = 4;

/// The framing header stores the record count in one byte.
pub const MAX_INTERNAL_NODES: usize = 255;

/// One side of a node record: either a literal leaf symbol or a reference to
/// another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    Leaf(u8),
    Index(u8),
}

/// A parsed 4-byte node record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    pub left: Child,
    pub right: Child,
}

impl NodeRecord {
    pub fn new(left: Child, right: Child) -> Self {
        Self { left, right }
    }
}

/// Serialize a tree to its postorder record bytes.
///
/// Precondition: the tree's internal nodes are numbered (see
/// [`number_nodes`](super::tree::number_nodes)); serializing an unnumbered
/// internal child is surfaced as [`HufError::MissingNodeNumber`]. A tree with
/// more than 255 internal nodes cannot be expressed in the one-byte framing
/// header and fails with [`HufError::TreeNodeOverflow`] before any bytes are
/// produced. The empty tree (and a bare leaf, which has no internal nodes)
/// serializes to zero bytes.
pub fn serialize_tree(tree: &HuffmanTree) -> Result<Vec<u8>> {
    let count = tree.internal_count();
    if count > MAX_INTERNAL_NODES {
        return Err(HufError::TreeNodeOverflow { count });
    }
    let mut bytes = Vec::with_capacity(count * RECORD_SIZE);
    write_records(tree, &mut bytes)?;
    trace!("serialized {} internal nodes", count);
    Ok(bytes)
}

fn write_records(tree: &HuffmanTree, out: &mut Vec<u8>) -> Result<()> {
    if let NodeData::Kids(left, right) = &tree.node_data {
        if !left.is_leaf() {
            write_records(left, out)?;
        }
        if !right.is_leaf() {
            write_records(right, out)?;
        }
        out.extend_from_slice(&child_bytes(left)?);
        out.extend_from_slice(&child_bytes(right)?);
    }
    Ok(())
}

fn child_bytes(child: &HuffmanTree) -> Result<[u8; 2]> {
    match &child.node_data {
        NodeData::Leaf(symbol) => Ok([0, *symbol]),
        NodeData::Kids(..) => match child.number {
            // The overflow check bounds numbers to 0..=254, so the cast holds.
            Some(number) => Ok([1, number as u8]),
            None => Err(HufError::MissingNodeNumber),
        },
        // The sentinel is only ever a root; a tree holding one below the
        // root has no record form.
        NodeData::Empty => Err(HufError::MissingNodeNumber),
    }
}

/// Parse a run of serialized bytes into records. The run must be a whole
/// number of 4-byte records and every type byte must be 0 or 1; anything else
/// is corrupt input.
pub fn records_from_bytes(bytes: &[u8]) -> Result<Vec<NodeRecord>> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(HufError::MalformedRecordList {
            index: bytes.len() / RECORD_SIZE,
            len: bytes.len() / RECORD_SIZE,
        });
    }
    bytes
        .chunks_exact(RECORD_SIZE)
        .enumerate()
        .map(|(index, chunk)| {
            let left = parse_child(chunk[0], chunk[1], index, bytes.len())?;
            let right = parse_child(chunk[2], chunk[3], index, bytes.len())?;
            Ok(NodeRecord { left, right })
        })
        .collect()
}

fn parse_child(kind: u8, data: u8, index: usize, byte_len: usize) -> Result<Child> {
    match kind {
        0 => Ok(Child::Leaf(data)),
        1 => Ok(Child::Index(data)),
        _ => Err(HufError::MalformedRecordList {
            index,
            len: byte_len / RECORD_SIZE,
        }),
    }
}

/// Rebuild a tree from records using general (absolute index) addressing,
/// rooted at `root_index`. Record order is irrelevant; a reference is simply
/// dereferenced. An empty record list yields the empty tree.
pub fn generate_tree_general(records: &[NodeRecord], root_index: usize) -> Result<HuffmanTree> {
    if records.is_empty() {
        return Ok(HuffmanTree::empty());
    }
    build_general(records, root_index, records.len())
}

fn build_general(records: &[NodeRecord], index: usize, budget: usize) -> Result<HuffmanTree> {
    // A well-formed list visits each record at most once, so exhausting the
    // budget means the references cycle.
    if budget == 0 {
        return Err(HufError::MalformedRecordList {
            index,
            len: records.len(),
        });
    }
    let record = records.get(index).ok_or(HufError::MalformedRecordList {
        index,
        len: records.len(),
    })?;
    let left = match record.left {
        Child::Leaf(symbol) => HuffmanTree::leaf(symbol),
        Child::Index(k) => build_general(records, k as usize, budget - 1)?,
    };
    let right = match record.right {
        Child::Leaf(symbol) => HuffmanTree::leaf(symbol),
        Child::Index(k) => build_general(records, k as usize, budget - 1)?,
    };
    Ok(HuffmanTree::internal(left, right))
}

/// Rebuild a tree from records using postorder (implicit index) addressing,
/// rooted at `root_index`. An internal right child is the record immediately
/// before its parent; an internal left child sits immediately before the
/// right child's whole subtree (immediately before the parent when the right
/// child is a leaf). A reference that would reach below record 0 is corrupt.
/// An empty record list yields the empty tree.
pub fn generate_tree_postorder(records: &[NodeRecord], root_index: usize) -> Result<HuffmanTree> {
    if records.is_empty() {
        return Ok(HuffmanTree::empty());
    }
    build_postorder(records, root_index).map(|(tree, _)| tree)
}

/// Rebuild the subtree rooted at `index`, returning it along with the count
/// of records it spans.
fn build_postorder(records: &[NodeRecord], index: usize) -> Result<(HuffmanTree, usize)> {
    let record = records.get(index).ok_or(HufError::MalformedRecordList {
        index,
        len: records.len(),
    })?;
    let (right, right_used) = match record.right {
        Child::Leaf(symbol) => (HuffmanTree::leaf(symbol), 0),
        Child::Index(_) => {
            let right_index = index.checked_sub(1).ok_or(HufError::MalformedRecordList {
                index,
                len: records.len(),
            })?;
            build_postorder(records, right_index)?
        }
    };
    let (left, left_used) = match record.left {
        Child::Leaf(symbol) => (HuffmanTree::leaf(symbol), 0),
        Child::Index(_) => {
            let left_index =
                index
                    .checked_sub(1 + right_used)
                    .ok_or(HufError::MalformedRecordList {
                        index,
                        len: records.len(),
                    })?;
            build_postorder(records, left_index)?
        }
    };
    Ok((HuffmanTree::internal(left, right), 1 + left_used + right_used))
}
