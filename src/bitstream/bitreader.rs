//! BitReader: reads a packed, most-significant-bit-first bitstream.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use crate::error::{CodecError, Result};

const BUFFER_SIZE: usize = 64 * 1024;
const BIT_MASK: u8 = 0xff;

/// Reads a packed bitstream.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    /// Bytes consumed from the source before the current buffer (for loc()).
    consumed: usize,
    source: R,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader (with a 64k buffer). Nothing is read until the first bit is requested.
    pub fn new(source: R) -> Self {
        Self {
            buffer: Vec::with_capacity(BUFFER_SIZE),
            cursor: 0,
            bit_index: 0,
            consumed: 0,
            source,
        }
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> Result<bool> {
        // Only try to read more data when the buffer length is equal to the buffer cursor location
        if self.cursor == self.buffer.len() {
            self.consumed += self.buffer.len();
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = loop {
                match self.source.read(&mut self.buffer) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            };
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            // Reset the cursor and bit index
            self.cursor = 0;
            self.bit_index = 0;
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True if no further bit can be read.
    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(!self.have_data()?)
    }

    /// Return the next bit as 1 or 0, or EndOfStream if there is no more data to read
    pub fn bit(&mut self) -> Result<usize> {
        if !self.have_data()? {
            return Err(CodecError::EndOfStream);
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Ok(bit as usize)
    }

    /// Return *true* if the next bit is 1, *false* if 0, consuming the bit.
    pub fn bool_bit(&mut self) -> Result<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return the next n bits (1..=32), most significant bit first.
    pub fn bits(&mut self, n: u32) -> Result<u32> {
        if !(1..=32).contains(&n) {
            return Err(CodecError::InvalidWidth(n));
        }
        /*
        Read as many bits as possible from each byte. Take what is left in the current
        byte, then whole bytes, then the leading part of one last byte.
        */
        let mut result = 0_u64;
        let mut needed = n as usize;
        while needed > 0 {
            if !self.have_data()? {
                return Err(CodecError::EndOfStream);
            }
            let available = 8 - self.bit_index;
            let take = needed.min(available);
            let chunk = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (available - take);
            result = result << take | chunk as u64;
            self.bit_index += take;
            if self.bit_index == 8 {
                self.bit_index = 0;
                self.cursor += 1;
            }
            needed -= take;
        }
        Ok(result as u32)
    }

    /// Returns the next 8 bits as a byte.
    pub fn byte(&mut self) -> Result<u8> {
        self.bits(8).map(|byte| byte as u8)
    }

    /// Returns the next 32 bits as a big-endian two's complement integer.
    pub fn i32(&mut self) -> Result<i32> {
        self.bits(32).map(|word| word as i32)
    }

    /// Debugging function. Report current position as bytes.bits from the start of the stream.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.consumed + self.cursor.min(self.buffer.len()), self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;
    use crate::error::CodecError;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bit().unwrap(), 1);
        for _ in 0..6 {
            assert_eq!(br.bit().unwrap(), 0);
        }
        assert_eq!(br.bit().unwrap(), 1);
        assert!(matches!(br.bit(), Err(CodecError::EndOfStream)));
    }

    #[test]
    fn bits_test() {
        let x = [0b00011011].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bits(5).unwrap(), 3);
        assert_eq!(br.bits(1).unwrap(), 0);
        assert_eq!(br.bits(2).unwrap(), 3);
    }

    #[test]
    fn bits_across_bytes_test() {
        let x = [0b1010_1010, 0b1100_1100, 0b1111_0000].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bits(4).unwrap(), 0b1010);
        assert_eq!(br.bits(12).unwrap(), 0b1010_1100_1100);
        assert_eq!(br.bits(3).unwrap(), 0b111);
        assert!(matches!(br.bits(6), Err(CodecError::EndOfStream)));
    }

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.byte().unwrap(), b'H');
        assert_eq!(br.byte().unwrap(), b'e');
        assert_eq!(br.byte().unwrap(), b'l');
        assert_eq!(br.byte().unwrap(), b'l');
    }

    #[test]
    fn i32_test() {
        let x = [0x80, 0x00, 0x00, 0x01, 0xff, 0xff, 0xff, 0xfe].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.i32().unwrap(), i32::MIN + 1);
        assert_eq!(br.i32().unwrap(), -2);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        for _ in 0..5 {
            br.byte().unwrap();
        }
        br.bit().unwrap();
        assert_eq!(br.loc(), "[5.1]");
    }

    #[test]
    fn is_empty_test() {
        let x = [0b01010000].as_slice();
        let mut br = BitReader::new(x);
        assert!(!br.is_empty().unwrap());
        assert!(!br.bool_bit().unwrap());
        assert!(br.bool_bit().unwrap());
        assert_eq!(br.bits(6).unwrap(), 0b010000);
        assert!(br.is_empty().unwrap());
    }

    #[test]
    fn empty_source_test() {
        let mut br = BitReader::new([0_u8; 0].as_slice());
        assert!(br.is_empty().unwrap());
        assert!(matches!(br.byte(), Err(CodecError::EndOfStream)));
    }

    #[test]
    fn bad_width_test() {
        let mut br = BitReader::new([0xff].as_slice());
        assert!(matches!(br.bits(0), Err(CodecError::InvalidWidth(0))));
        assert!(matches!(br.bits(33), Err(CodecError::InvalidWidth(33))));
    }
}
