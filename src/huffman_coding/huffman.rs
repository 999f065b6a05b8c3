use std::io::{Read, Write};

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{CodecError, Result};
use crate::tools::freq_count::freqs;

use super::code_table::CodeTable;
use super::trie::Trie;

/// Largest up-front allocation made from a count read off the stream.
const MAX_PREALLOC: usize = 1 << 20;

/// Huffman compress `data` into a new buffer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_into(data, Vec::with_capacity(data.len() / 2 + 64))
}

/// Huffman compress `data` onto `sink`, which is returned once the stream is closed.
///
/// Output: the trie in preorder, the symbol count as a 32 bit signed int, then the code
/// for each input byte in order. The last byte is padded with 0 bits.
pub fn compress_into<W: Write>(data: &[u8], sink: W) -> Result<W> {
    let count = i32::try_from(data.len()).map_err(|_| {
        CodecError::InvalidInput(format!(
            "{} bytes is too large for a 32 bit symbol count",
            data.len()
        ))
    })?;

    let mut freqs = freqs(data);
    // Empty input still gets a (one leaf) trie so the stream layout never changes.
    if data.is_empty() {
        freqs[0] = 1;
    }
    // from_freqs only fails on an all-zero table, which we just ruled out.
    let trie = Trie::from_freqs(&freqs)
        .ok_or_else(|| CodecError::InvalidInput("no symbols to build a trie from".to_string()))?;
    let table = CodeTable::from_trie(&trie);
    info!(
        "Huffman: {} bytes, {} distinct symbols.",
        data.len(),
        table.iter().count()
    );

    let mut bw = BitWriter::new(sink);
    trie.write(&mut bw)?;
    debug!("Trie written, ends at {}.", bw.loc());
    bw.write_i32(count)?;

    for &byte in data {
        match table.get(byte) {
            Some(code) => code.write(&mut bw)?,
            None => {
                return Err(CodecError::InvalidInput(format!(
                    "no code for symbol {}",
                    byte
                )))
            }
        }
    }
    debug!("Huffman data ends at {}.", bw.loc());
    bw.into_inner()
}

/// Expand a Huffman compressed buffer.
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_from(data)
}

/// Expand a Huffman compressed stream read from `source`.
///
/// The count read after the trie is authoritative: exactly that many symbols are decoded and
/// any trailing padding is ignored.
pub fn expand_from<I: Read>(source: I) -> Result<Vec<u8>> {
    let mut br = BitReader::new(source);
    let trie = Trie::read(&mut br)?;
    let count = br.i32()?;
    if count < 0 {
        return Err(CodecError::CorruptStream(format!(
            "negative symbol count {}",
            count
        )));
    }
    let count = count as usize;
    info!(
        "Huffman: expanding {} symbols with a {} node trie.",
        count,
        trie.len()
    );

    let mut out = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        out.push(trie.decode_symbol(&mut br)?);
    }
    debug!("Huffman data ends at {}.", br.loc());
    Ok(out)
}
