//! The tools module provides helpers for the codecs and the command line tool.
//!
//! The tools are:
//! - cli: Command line interface and the options it produces.
//! - freq_count: Byte frequency count for the Huffman coder.
//! - run_length: Bit level run-length codec.
//!
pub mod cli;
pub mod freq_count;
pub mod run_length;
