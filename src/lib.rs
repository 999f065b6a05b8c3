//! Classical compression of byte streams.
//!
//! Provides two independent codecs plus a small bit level run-length coder, all built on one
//! most-significant-bit-first bitstream:
//!
//! - Static Huffman coding. The trie is written ahead of the data, followed by the symbol count.
//! - Lempel-Ziv-Welch with fixed 12 bit codewords, a 4096 entry table and codeword 256 as the
//!   end of stream marker.
//! - Run-length coding of alternating bit runs as 8 bit counts.
//!
//! Every codec takes one complete buffer and returns one complete buffer:
//!
//! ```
//! let packed = bytepress::lzw::codec::compress(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
//! let unpacked = bytepress::lzw::codec::expand(&packed).unwrap();
//! assert_eq!(unpacked, b"TOBEORNOTTOBEORTOBEORNOT".to_vec());
//! ```
//!
//! The command line tool compresses a file with:
//!
//! `$> bytepress -a huffman test.txt`
//!
//! This will create the file test.txt.huf. `-d` expands it again.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lzw;
pub mod tools;
