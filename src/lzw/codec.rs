use std::io::{Read, Write};

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{CodecError, Result};

use super::dictionary::{DecodeDict, EncodeDict};
use super::{EOF_CODE, L, WIDTH};

const LAST_CODE: u16 = L as u16 - 1;

/// LZW compress `data` into a new buffer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_into(data, Vec::with_capacity(data.len() / 2 + 2))
}

/// LZW compress `data` onto `sink`, which is returned once the stream is closed.
pub fn compress_into<W: Write>(data: &[u8], sink: W) -> Result<W> {
    let mut bw = BitWriter::new(sink);
    let dict = encode(data, &mut bw)?;
    info!(
        "LZW: {} bytes in, {} table entries, stream is {}.",
        data.len(),
        dict.len(),
        bw.loc()
    );
    bw.into_inner()
}

/// Write the codewords for `data`, then EOF_CODE. Returns the final table.
///
/// Each step emits the longest table entry that prefixes the rest of the input and, if any
/// input follows it and there is room, adds that entry plus the next byte to the table.
pub fn encode<W: Write>(data: &[u8], bw: &mut BitWriter<W>) -> Result<EncodeDict> {
    let mut dict = EncodeDict::new();
    let mut pos = 0;
    while let Some((code, len)) = dict.longest_prefix(&data[pos..]) {
        bw.write_bits(code as u32, WIDTH)?;
        if let Some(&next) = data.get(pos + len) {
            if dict.insert(code, next) == Some(LAST_CODE) {
                debug!("LZW table full at input offset {}.", pos);
            }
        }
        pos += len;
    }
    bw.write_bits(EOF_CODE as u32, WIDTH)?;
    Ok(dict)
}

/// Expand an LZW compressed buffer.
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_from(data)
}

/// Expand an LZW compressed stream read from `source`.
pub fn expand_from<I: Read>(source: I) -> Result<Vec<u8>> {
    let mut br = BitReader::new(source);
    let mut out = Vec::new();
    let dict = decode(&mut br, &mut out)?;
    info!(
        "LZW: {} bytes out, {} table entries.",
        out.len(),
        dict.len()
    );
    Ok(out)
}

/// Read codewords up to EOF_CODE, appending their strings to `out`. Returns the final table.
///
/// A codeword may name the entry the encoder added in the same step it emitted it. That entry
/// is not in our table yet, but it can only be the previous string plus its own first byte.
pub fn decode<I: Read>(br: &mut BitReader<I>, out: &mut Vec<u8>) -> Result<DecodeDict> {
    let mut dict = DecodeDict::new();

    let mut prev = br.bits(WIDTH)? as u16;
    if prev == EOF_CODE {
        return Ok(dict);
    }
    if !dict.contains(prev) {
        return Err(bad_codeword(prev, &dict));
    }
    dict.write_entry(prev, out);

    loop {
        let code = br.bits(WIDTH)? as u16;
        if code == EOF_CODE {
            break;
        }
        let first = if dict.contains(code) {
            dict.write_entry(code, out);
            dict.first(code)
        } else if code == dict.next_code() {
            let first = dict.first(prev);
            dict.write_entry(prev, out);
            out.push(first);
            first
        } else {
            return Err(bad_codeword(code, &dict));
        };
        if dict.insert(prev, first) == Some(LAST_CODE) {
            debug!("LZW table full, {} bytes out.", out.len());
        }
        prev = code;
    }
    debug!("LZW stream ends at {}.", br.loc());
    Ok(dict)
}

fn bad_codeword(code: u16, dict: &DecodeDict) -> CodecError {
    CodecError::CorruptStream(format!(
        "codeword {} with only {} table entries",
        code,
        dict.len()
    ))
}
