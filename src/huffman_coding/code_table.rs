//! Symbol to bit-string table derived from a Huffman trie.

use std::io::Write;

use crate::bitstream::bitwriter::BitWriter;
use crate::error::Result;

use super::trie::{NodeData, Trie, R};

/// A variable length code, first bit first. A trie can be 255 levels deep, so the bits are
/// kept in a Vec rather than packed into an integer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Put this code on the stream.
    pub fn write<W: Write>(&self, bw: &mut BitWriter<W>) -> Result<()> {
        self.bits.iter().try_for_each(|&bit| bw.write_bit(bit))
    }
}

/// Codes for every symbol present in the trie, indexed by symbol.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Walk the trie depth first, 0 for a left edge and 1 for a right edge. A trie that is a
    /// lone leaf gives that symbol the 1 bit code "0".
    pub fn from_trie(trie: &Trie) -> Self {
        let mut codes: Vec<Option<Code>> = vec![None; R];
        let mut stack = vec![(trie.root(), Vec::new())];
        while let Some((id, path)) = stack.pop() {
            match trie.node(id).node_data {
                NodeData::Leaf(sym) => {
                    let bits = if path.is_empty() { vec![false] } else { path };
                    codes[sym as usize] = Some(Code { bits });
                }
                NodeData::Kids(left, right) => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }
        CodeTable { codes }
    }

    /// Code for a symbol, or None if the symbol was not in the trie.
    pub fn get(&self, sym: u8) -> Option<&Code> {
        self.codes[sym as usize].as_ref()
    }

    /// (symbol, code) pairs for every symbol that has a code.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.as_ref().map(|c| (sym as u8, c)))
    }

    /// True if no code is a prefix of another code in the table.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman_coding::trie::Trie;

    fn table_of(preorder: &[Option<u8>]) -> CodeTable {
        CodeTable::from_trie(&Trie::from_preorder(preorder).unwrap())
    }

    #[test]
    fn codes_test() {
        let table = table_of(&[None, Some(b'a'), None, Some(b'b'), Some(b'c')]);
        assert_eq!(table.get(b'a').unwrap().bits(), &[false]);
        assert_eq!(table.get(b'b').unwrap().bits(), &[true, false]);
        assert_eq!(table.get(b'c').unwrap().bits(), &[true, true]);
        assert!(table.get(b'd').is_none());
        assert_eq!(table.iter().count(), 3);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn single_leaf_code_test() {
        let table = table_of(&[Some(b'q')]);
        assert_eq!(table.get(b'q').unwrap().bits(), &[false]);
    }

    #[test]
    fn deep_trie_test() {
        let mut preorder = vec![None; 255];
        preorder.extend((0..=255_u8).map(Some));
        let table = table_of(&preorder);
        assert_eq!(table.get(0).unwrap().len(), 255);
        assert_eq!(table.get(1).unwrap().len(), 255);
        assert_eq!(table.get(255).unwrap().bits(), &[true]);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn prefix_check_test() {
        let table = table_of(&[None, Some(1), Some(2)]);
        let one = table.get(1).unwrap();
        let two = table.get(2).unwrap();
        assert!(!one.is_prefix_of(two));
        assert!(one.is_prefix_of(one));
    }
}
