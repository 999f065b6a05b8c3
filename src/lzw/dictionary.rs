//! The two LZW code tables. Both start with the 256 single byte strings, keep codeword 256 for
//! end of stream, and add one entry per step until 4096 codewords are in use. After that they
//! stop growing and coding carries on with what is there.

use rustc_hash::FxHashMap;

use super::{EOF_CODE, L, R};

/// Encode side: a prefix trie over the table. Every entry past the single bytes is an existing
/// entry plus one byte, so it is stored as (parent codeword, byte) -> codeword and the longest
/// match is found by walking forward through the input.
#[derive(Debug)]
pub struct EncodeDict {
    children: FxHashMap<(u16, u8), u16>,
    /// (parent, byte) for each codeword from EOF_CODE + 1 up, in the order they were added.
    added: Vec<(u16, u8)>,
    next_code: u16,
}

impl EncodeDict {
    pub fn new() -> Self {
        Self {
            children: FxHashMap::default(),
            added: Vec::new(),
            next_code: EOF_CODE + 1,
        }
    }

    /// Longest entry that is a prefix of `input`, as (codeword, length). None for empty input.
    pub fn longest_prefix(&self, input: &[u8]) -> Option<(u16, usize)> {
        let mut code = *input.first()? as u16;
        let mut len = 1;
        while let Some(&next) = input
            .get(len)
            .and_then(|&sym| self.children.get(&(code, sym)))
        {
            code = next;
            len += 1;
        }
        Some((code, len))
    }

    /// Add the entry `prefix` + `sym` under the next codeword. Returns None, and adds nothing,
    /// once the table is full.
    pub fn insert(&mut self, prefix: u16, sym: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code;
        self.children.insert((prefix, sym), code);
        self.added.push((prefix, sym));
        self.next_code += 1;
        Some(code)
    }

    pub fn is_full(&self) -> bool {
        self.next_code as usize >= L
    }

    /// Codewords in use, counting the reserved end of stream slot.
    pub fn len(&self) -> usize {
        self.next_code as usize
    }

    /// The string for a codeword, or None for EOF_CODE and unassigned codewords.
    pub fn entry(&self, code: u16) -> Option<Vec<u8>> {
        if (code as usize) < R {
            return Some(vec![code as u8]);
        }
        if code <= EOF_CODE || code >= self.next_code {
            return None;
        }
        let mut out = Vec::new();
        let mut code = code;
        while code > EOF_CODE {
            let (parent, sym) = self.added[(code - EOF_CODE - 1) as usize];
            out.push(sym);
            code = parent;
        }
        out.push(code as u8);
        out.reverse();
        Some(out)
    }
}

impl Default for EncodeDict {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: u16,
    last: u8,
    first: u8,
    len: usize,
}

/// Decode side: codeword -> string, with each entry stored as its prefix codeword plus the
/// last byte so no entry copies its prefix.
#[derive(Debug)]
pub struct DecodeDict {
    entries: Vec<Entry>,
}

impl DecodeDict {
    pub fn new() -> Self {
        let mut entries: Vec<Entry> = (0..R)
            .map(|sym| Entry {
                prefix: sym as u16,
                last: sym as u8,
                first: sym as u8,
                len: 1,
            })
            .collect();
        // Reserved end of stream slot. Never looked up.
        entries.push(Entry {
            prefix: EOF_CODE,
            last: 0,
            first: 0,
            len: 0,
        });
        Self { entries }
    }

    /// Next codeword to be assigned. A stream may legitimately use it one step early.
    pub fn next_code(&self) -> u16 {
        self.entries.len() as u16
    }

    /// True if `code` has a string (it is assigned and is not EOF_CODE).
    pub fn contains(&self, code: u16) -> bool {
        code != EOF_CODE && (code as usize) < self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= L
    }

    /// Codewords in use, counting the reserved end of stream slot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First byte of the string for `code`, which must satisfy contains().
    pub(crate) fn first(&self, code: u16) -> u8 {
        debug_assert!(self.contains(code), "codeword {} is not assigned", code);
        self.entries[code as usize].first
    }

    /// Append the string for `code`, which must satisfy contains(), to `out`.
    pub(crate) fn write_entry(&self, code: u16, out: &mut Vec<u8>) {
        debug_assert!(self.contains(code), "codeword {} is not assigned", code);
        let start = out.len();
        let entry = self.entries[code as usize];
        out.resize(start + entry.len, 0);
        let mut code = code;
        for slot in out[start..].iter_mut().rev() {
            let entry = self.entries[code as usize];
            *slot = entry.last;
            code = entry.prefix;
        }
    }

    /// The string for a codeword, or None if it is not assigned.
    pub fn entry(&self, code: u16) -> Option<Vec<u8>> {
        if !self.contains(code) {
            return None;
        }
        let mut out = Vec::new();
        self.write_entry(code, &mut out);
        Some(out)
    }

    /// Add the entry (string of `prefix`) + `sym` under the next codeword, unless the table is full.
    pub fn insert(&mut self, prefix: u16, sym: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let parent = self.entries[prefix as usize];
        self.entries.push(Entry {
            prefix,
            last: sym,
            first: parent.first,
            len: parent.len + 1,
        });
        Some(self.entries.len() as u16 - 1)
    }
}

impl Default for DecodeDict {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{DecodeDict, EncodeDict};
    use crate::lzw::{EOF_CODE, L};

    #[test]
    fn seeded_test() {
        let enc = EncodeDict::new();
        let dec = DecodeDict::new();
        assert_eq!(enc.len(), 257);
        assert_eq!(dec.len(), 257);
        assert_eq!(enc.entry(b'A' as u16), Some(vec![b'A']));
        assert_eq!(dec.entry(b'A' as u16), Some(vec![b'A']));
        assert_eq!(enc.entry(EOF_CODE), None);
        assert_eq!(dec.entry(EOF_CODE), None);
        assert_eq!(dec.next_code(), 257);
    }

    #[test]
    fn longest_prefix_test() {
        let mut enc = EncodeDict::new();
        assert_eq!(enc.longest_prefix(b""), None);
        assert_eq!(enc.longest_prefix(b"ABC"), Some((b'A' as u16, 1)));
        let ab = enc.insert(b'A' as u16, b'B').unwrap();
        assert_eq!(ab, 257);
        let abc = enc.insert(ab, b'C').unwrap();
        assert_eq!(enc.longest_prefix(b"ABCD"), Some((abc, 3)));
        assert_eq!(enc.longest_prefix(b"ABD"), Some((ab, 2)));
        assert_eq!(enc.longest_prefix(b"AB"), Some((ab, 2)));
        assert_eq!(enc.entry(abc), Some(b"ABC".to_vec()));
    }

    #[test]
    fn decode_entries_test() {
        let mut dec = DecodeDict::new();
        let ab = dec.insert(b'A' as u16, b'B').unwrap();
        let abb = dec.insert(ab, b'B').unwrap();
        assert_eq!(dec.entry(abb), Some(b"ABB".to_vec()));
        assert_eq!(dec.first(abb), b'A');
        assert!(dec.contains(abb));
        assert!(!dec.contains(abb + 1));
        let mut out = b"x".to_vec();
        dec.write_entry(abb, &mut out);
        assert_eq!(out, b"xABB".to_vec());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not assigned")]
    fn unassigned_first_test() {
        let dec = DecodeDict::new();
        dec.first(dec.next_code());
    }

    #[test]
    fn capacity_test() {
        let mut enc = EncodeDict::new();
        let mut dec = DecodeDict::new();
        let mut added = 0;
        while enc.insert(b'a' as u16, (added % 256) as u8).is_some() {
            dec.insert(b'a' as u16, (added % 256) as u8).unwrap();
            added += 1;
        }
        assert_eq!(added, L - 257);
        assert_eq!(enc.len(), L);
        assert_eq!(dec.len(), L);
        assert!(enc.is_full() && dec.is_full());
        assert_eq!(dec.insert(1, 1), None);
    }
}
