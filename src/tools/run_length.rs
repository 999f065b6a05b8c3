//! Bit level run-length coding.
//!
//! The input is read as a bitstream and written as 8 bit counts of alternating runs, starting
//! with a run of 0 bits (which may be empty). A run longer than 255 is split as 255, then an
//! empty run of the other bit, then the rest.
//!
//! Works well on bitmaps and other data with long runs of the same bit, badly on text.

use std::io::{Read, Write};

use log::info;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;

const MAX_RUN: u8 = u8::MAX;

/// Run-length encode `data` into a new buffer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_into(data, Vec::new())
}

/// Run-length encode the bits read from `source` onto `sink`, which is returned once closed.
pub fn compress_into<I: Read, W: Write>(source: I, sink: W) -> Result<W> {
    let mut br = BitReader::new(source);
    let mut bw = BitWriter::new(sink);
    let mut count: u8 = 0;
    let mut old = false;
    let mut runs = 0_usize;

    while !br.is_empty()? {
        let bit = br.bool_bit()?;
        if bit != old {
            bw.write_byte(count)?;
            runs += 1;
            count = 0;
            old = !old;
        } else if count == MAX_RUN {
            bw.write_byte(count)?;
            bw.write_byte(0)?;
            runs += 2;
            count = 0;
        }
        count += 1;
    }
    bw.write_byte(count)?;
    info!("Run-length: {} runs, stream is {}.", runs + 1, bw.loc());
    bw.into_inner()
}

/// Expand a run-length encoded buffer.
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_into(data, Vec::new())
}

/// Expand the counts read from `source` onto `sink`, which is returned once closed.
pub fn expand_into<I: Read, W: Write>(source: I, sink: W) -> Result<W> {
    let mut br = BitReader::new(source);
    let mut bw = BitWriter::new(sink);
    let mut bit = false;
    while !br.is_empty()? {
        let count = br.byte()?;
        for _ in 0..count {
            bw.write_bit(bit)?;
        }
        bit = !bit;
    }
    bw.into_inner()
}

#[cfg(test)]
mod test {
    use super::{compress, expand};

    #[test]
    fn runs_test() {
        // 15 zeros, 7 ones, 7 zeros, 11 ones
        let input = [0x00, 0x01, 0xfc, 0x07, 0xff];
        let packed = compress(&input).unwrap();
        assert_eq!(packed, vec![15, 7, 7, 11]);
        assert_eq!(expand(&packed).unwrap(), input.to_vec());
    }

    #[test]
    fn long_run_test() {
        let input = vec![0_u8; 75];
        let packed = compress(&input).unwrap();
        assert_eq!(packed, vec![255, 0, 255, 0, 90]);
        assert_eq!(expand(&packed).unwrap(), input);
    }

    #[test]
    fn leading_one_test() {
        let packed = compress(&[0x80]).unwrap();
        assert_eq!(packed, vec![0, 1, 7]);
        assert_eq!(expand(&packed).unwrap(), vec![0x80]);
    }

    #[test]
    fn empty_test() {
        let packed = compress(&[]).unwrap();
        assert_eq!(packed, vec![0]);
        assert!(expand(&packed).unwrap().is_empty());
    }

    #[test]
    fn text_round_trip_test() {
        let input = b"Hello, world! Hello, world! \x00\x00\x00\xff\xff".to_vec();
        let packed = compress(&input).unwrap();
        assert_eq!(expand(&packed).unwrap(), input);
    }
}
