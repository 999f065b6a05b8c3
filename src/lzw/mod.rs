//! The lzw module implements a Lempel-Ziv-Welch coder with fixed 12 bit codewords.
//!
//! Both sides start from the 256 single byte strings and add one entry per codeword they see,
//! in the same order, so the tables never need to be sent. Codeword 256 marks the end of the
//! stream and is never given a string. Once 4096 codewords are in use the tables stop growing
//! and coding continues with the existing entries.
//!

pub mod codec;
pub mod dictionary;

/// Number of single byte strings the tables start with.
pub const R: usize = 256;
/// Number of codewords (2^WIDTH).
pub const L: usize = 4096;
/// Codeword width in bits.
pub const WIDTH: u32 = 12;
/// End of stream codeword.
pub const EOF_CODE: u16 = R as u16;
