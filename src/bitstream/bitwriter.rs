use log::{error, trace};

use crate::error::{CodecError, Result};

/// Bytes held in the output buffer before they are pushed to the sink.
const FLUSH_SIZE: usize = 64 * 1024;

/// Writes a bitstream, most significant bit first, to any sink that supports write().
pub struct BitWriter<W: std::io::Write> {
    /// Output buffer of packed bytes waiting for the sink.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total bytes handed to the sink so far (for loc()).
    written: usize,
    /// Set by close(). Any later write is refused.
    closed: bool,
    /// Handle to the output stream
    sink: W,
}

impl<W: std::io::Write> BitWriter<W> {
    /// Create a new BitWriter over the sink. Call close() (or into_inner()) when done or the
    /// trailing partial byte will be lost.
    pub fn new(sink: W) -> Self {
        Self {
            output: Vec::with_capacity(FLUSH_SIZE),
            queue: 0,
            q_bits: 0,
            written: 0,
            closed: false,
            sink,
        }
    }

    /// Internal bitstream write function common to all write functions.
    fn push_queue(&mut self) -> Result<()> {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
        if self.output.len() >= FLUSH_SIZE {
            self.drain_output()?;
        }
        Ok(())
    }

    /// Hand everything in the output buffer to the sink.
    fn drain_output(&mut self) -> Result<()> {
        self.sink.write_all(&self.output)?;
        self.written += self.output.len();
        self.output.clear();
        Ok(())
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(CodecError::StreamClosed);
        }
        Ok(())
    }

    /// Put a single bit on the stream.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.check_open()?;
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.push_queue()
    }

    /// Put the low `width` bits of `value` on the stream, most significant bit first.
    /// Width must be 1..=32 and the value must fit in it.
    pub fn write_bits(&mut self, value: u32, width: u32) -> Result<()> {
        self.check_open()?;
        if !(1..=32).contains(&width) || (width < 32 && value >> width != 0) {
            return Err(CodecError::InvalidWidth(width));
        }
        self.queue <<= width; //shift queue by bit length
        self.queue |= value as u64; //add data portion to queue
        self.q_bits += width as u8; //update depth of queue bits
        self.push_queue()
    }

    /// Put a byte on the stream. It is only byte aligned if the stream currently is.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, 8)
    }

    /// Put a run of bytes on the stream.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        bytes.iter().try_for_each(|&b| self.write_byte(b))
    }

    /// Put a 32 bit signed integer on the stream, big-endian two's complement.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_bits(value as u32, 32)
    }

    /// Pads the remaining bits (1-7) with 0s in the least significant bits, writes everything
    /// to the sink and flushes it. Closing twice is harmless; writing after close is an error.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits = 8;
            self.push_queue()?;
            if self.q_bits > 0 {
                error!("Stuff left in the BitWriter queue.");
            }
        }
        self.drain_output()?;
        self.sink.flush()?;
        self.closed = true;
        trace!("BitWriter closed after {} bytes.", self.written);
        Ok(())
    }

    /// Close the stream (if needed) and give back the sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.close()?;
        Ok(self.sink)
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        let bits = (self.written + self.output.len()) * 8 + self.q_bits as usize;
        format!("[{}.{}]", bits / 8, bits % 8)
    }
}
