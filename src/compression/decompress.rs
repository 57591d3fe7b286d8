use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::compression::codec::decompress_bytes;
use crate::compression::compress::EXTENSION;
use crate::error::{HufError, Result};
use crate::huffman_coding::serialize::{generate_tree_general, records_from_bytes, RECORD_SIZE};
use crate::tools::cli::HufOpts;

/// Decompress a framed buffer produced by
/// [`compress_buffer`](crate::compression::compress::compress_buffer).
///
/// Reads the one-byte record count, exactly that many 4-byte records, the
/// big-endian original length, and decodes the remaining payload. The tree is
/// rebuilt with general addressing rooted at the last record, which is always
/// the root since records are written in postorder. Every short read fails
/// with [`HufError::TruncatedStream`] before any decoding happens.
pub fn decompress_buffer(data: &[u8]) -> Result<Vec<u8>> {
    let node_count = *data.first().ok_or(HufError::TruncatedStream {
        expected: 1,
        actual: 0,
    })? as usize;

    let records_end = 1 + node_count * RECORD_SIZE;
    let record_bytes = data
        .get(1..records_end)
        .ok_or(HufError::TruncatedStream {
            expected: records_end,
            actual: data.len(),
        })?;
    let records = records_from_bytes(record_bytes)?;
    let tree = generate_tree_general(&records, node_count.saturating_sub(1))?;

    let size_bytes = data
        .get(records_end..records_end + 4)
        .ok_or(HufError::TruncatedStream {
            expected: records_end + 4,
            actual: data.len(),
        })?;
    let size = u32::from_be_bytes([size_bytes[0], size_bytes[1], size_bytes[2], size_bytes[3]]);
    info!(
        "{} tree records, {} original bytes to recover",
        node_count, size
    );

    decompress_bytes(&tree, &data[records_end + 4..], size as usize)
}

/// Decompress every file named in the options. Output is the input name with
/// the `.huf` extension stripped, or with `.orig` appended when the input
/// does not carry the extension. Existing outputs are only replaced under
/// --force.
pub fn decompress(opts: &HufOpts) -> Result<()> {
    for fname in &opts.files {
        let data = fs::read(fname)?;
        info!("Decompressing {} ({} bytes)", fname, data.len());

        let out = decompress_buffer(&data)?;

        let out_name = match fname.strip_suffix(EXTENSION) {
            Some(stem) => stem.to_string(),
            None => {
                warn!("{} does not end in {}", fname, EXTENSION);
                format!("{}.orig", fname)
            }
        };
        if Path::new(&out_name).exists() && !opts.force_overwrite {
            warn!("{} exists; skipping (use --force to overwrite)", out_name);
            continue;
        }
        fs::write(&out_name, &out)?;
        info!("Wrote {} ({} bytes)", out_name, out.len());
    }
    Ok(())
}
