use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::compression::codec::compress_bytes;
use crate::error::{HufError, Result};
use crate::huffman_coding::build::build_huffman_tree;
use crate::huffman_coding::codes::{avg_length, get_codes};
use crate::huffman_coding::improve::improve_tree;
use crate::huffman_coding::serialize::{serialize_tree, RECORD_SIZE};
use crate::huffman_coding::tree::number_nodes;
use crate::tools::cli::HufOpts;
use crate::tools::freq_count::build_frequency_table;

/// Extension given to compressed files.
pub const EXTENSION: &str = ".huf";

/// Compress a whole buffer into the framed file format:
/// `[1 byte: record count][4 bytes per record: serialized tree]
/// [4 bytes: original length, big-endian][packed bitstream]`.
///
/// With `improve` set, the leaf improvement pass runs between building the
/// tree and deriving the codes; the reshuffled tree is what gets serialized,
/// so decompression is unaffected. Empty input is well-defined and produces
/// the 5-byte frame of an empty tree and a zero length.
pub fn compress_buffer(data: &[u8], improve: bool) -> Result<Vec<u8>> {
    // The frame stores the original length in four bytes.
    let size = u32::try_from(data.len()).map_err(|_| HufError::OversizeInput { len: data.len() })?;

    let freqs = build_frequency_table(data);
    debug!("{} distinct symbols", freqs.len());

    let mut tree = build_huffman_tree(&freqs);
    if improve {
        improve_tree(&mut tree, &freqs);
    }
    let codes = get_codes(&tree);
    number_nodes(&mut tree);
    info!("Bits per symbol: {:.3}", avg_length(&tree, &freqs));

    let records = serialize_tree(&tree)?;
    let node_count = records.len() / RECORD_SIZE;

    let mut out = Vec::with_capacity(1 + records.len() + 4 + data.len() / 2 + 1);
    out.push(node_count as u8);
    out.extend_from_slice(&records);
    out.extend_from_slice(&size.to_be_bytes());
    out.extend_from_slice(&compress_bytes(data, &codes)?);
    Ok(out)
}

/// Compress every file named in the options, writing `<name>.huf` beside each
/// input. Existing outputs are only replaced under --force.
pub fn compress(opts: &HufOpts) -> Result<()> {
    for fname in &opts.files {
        let data = fs::read(fname)?;
        info!("Compressing {} ({} bytes)", fname, data.len());

        let out = compress_buffer(&data, opts.improve)?;

        let out_name = format!("{}{}", fname, EXTENSION);
        if Path::new(&out_name).exists() && !opts.force_overwrite {
            warn!("{} exists; skipping (use --force to overwrite)", out_name);
            continue;
        }
        fs::write(&out_name, &out)?;
        if data.is_empty() {
            info!("Wrote {} ({} bytes)", out_name, out.len());
        } else {
            info!(
                "Wrote {} ({} bytes, {:.1}% of original)",
                out_name,
                out.len(),
                out.len() as f64 * 100.0 / data.len() as f64
            );
        }
    }
    Ok(())
}
