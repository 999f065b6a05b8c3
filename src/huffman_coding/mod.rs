//! The huffman module implements a static Huffman coder over bytes.
//!
//! One trie is built per input from the byte frequencies. The trie itself is written ahead of the
//! data so the decoder needs nothing else: a preorder walk where a 1 bit introduces a leaf and its
//! 8 bit symbol and a 0 bit introduces an internal node. The symbol count follows as a 32 bit
//! signed int, then the codes.
//!
//! The trie lives in an arena and every walk over it is iterative, so a heavily skewed frequency
//! table (a trie up to 255 levels deep) is no problem.
//!

pub mod code_table;
pub mod huffman;
pub mod trie;
