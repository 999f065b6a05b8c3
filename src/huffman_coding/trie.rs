//! Huffman trie held in an arena. Nodes refer to their children by index, so building,
//! serializing and walking the trie never recurses, however skewed the weights are.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io::{Read, Write};

use log::trace;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{CodecError, Result};

/// Number of distinct symbols (extended ASCII).
pub const R: usize = 256;

/// Index of a node in the trie arena.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Frequency during construction. Always 0 in a trie read back from a stream.
    pub weight: u64,
    pub node_data: NodeData,
}

/// A strictly binary trie: every node is a leaf or has exactly two kids.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Trie {
    /// Build the trie from a 256 entry frequency table. Returns None if every frequency is 0.
    ///
    /// Nodes sit in a min-queue keyed by (weight, arena index). Leaves go into the arena in
    /// symbol order and merged nodes in creation order, so among equal weights the node that
    /// entered the queue first is taken first. The first node taken becomes the left kid.
    pub fn from_freqs(freqs: &[u32]) -> Option<Trie> {
        let mut nodes: Vec<Node> = freqs
            .iter()
            .take(R)
            .enumerate()
            .filter(|&(_, &f)| f > 0)
            .map(|(sym, &f)| Node {
                weight: f as u64,
                node_data: NodeData::Leaf(sym as u8),
            })
            .collect();

        let mut queue: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Reverse((node.weight, id)))
            .collect();

        // Merge the two lightest subtrees until one is left.
        while queue.len() > 1 {
            let Reverse((left_weight, left)) = queue.pop()?;
            let Reverse((right_weight, right)) = queue.pop()?;
            let weight = left_weight + right_weight;
            nodes.push(Node {
                weight,
                node_data: NodeData::Kids(left, right),
            });
            queue.push(Reverse((weight, nodes.len() - 1)));
        }

        let Reverse((_, root)) = queue.pop()?;
        trace!("Built a trie of {} nodes, root weight {}.", nodes.len(), nodes[root].weight);
        Some(Trie { nodes, root })
    }

    /// Rebuild a trie from its preorder description: None for an internal node, Some(symbol)
    /// for a leaf. Fails if the description is not exactly one complete binary tree.
    pub fn from_preorder(preorder: &[Option<u8>]) -> Result<Trie> {
        let mut nodes: Vec<Node> = Vec::with_capacity(preorder.len());
        // Working backwards, both subtrees of an internal node are already on the stack,
        // left subtree on top.
        let mut stack: Vec<NodeId> = Vec::new();
        for token in preorder.iter().rev() {
            let node_data = match token {
                Some(sym) => NodeData::Leaf(*sym),
                None => {
                    let left = stack.pop();
                    let right = stack.pop();
                    match (left, right) {
                        (Some(left), Some(right)) => NodeData::Kids(left, right),
                        _ => {
                            return Err(CodecError::CorruptStream(
                                "internal trie node is missing a kid".to_string(),
                            ))
                        }
                    }
                }
            };
            nodes.push(Node {
                weight: 0,
                node_data,
            });
            stack.push(nodes.len() - 1);
        }
        match stack.as_slice() {
            [root] => Ok(Trie { nodes, root: *root }),
            _ => Err(CodecError::CorruptStream(format!(
                "trie description holds {} trees",
                stack.len()
            ))),
        }
    }

    /// Preorder description of the trie: None for an internal node, Some(symbol) for a leaf.
    pub fn preorder(&self) -> Vec<Option<u8>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            match self.nodes[id].node_data {
                NodeData::Leaf(sym) => out.push(Some(sym)),
                NodeData::Kids(left, right) => {
                    out.push(None);
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Serialize in preorder: a 1 bit and the 8 bit symbol for a leaf, a 0 bit for an internal
    /// node followed by its left then right subtree.
    pub fn write<W: Write>(&self, bw: &mut BitWriter<W>) -> Result<()> {
        for token in self.preorder() {
            match token {
                Some(sym) => {
                    bw.write_bit(true)?;
                    bw.write_byte(sym)?;
                }
                None => bw.write_bit(false)?,
            }
        }
        Ok(())
    }

    /// Parse a trie written by write(). A stream that ends early, repeats a symbol, or
    /// describes more than 256 leaves is corrupt.
    pub fn read<I: Read>(br: &mut BitReader<I>) -> Result<Trie> {
        let mut preorder: Vec<Option<u8>> = Vec::new();
        let mut seen = [false; R];
        let mut internal = 0;
        // Subtrees still owed by the nodes read so far.
        let mut pending = 1;
        while pending > 0 {
            pending -= 1;
            if truncated(br.bool_bit())? {
                let sym = truncated(br.byte())?;
                if seen[sym as usize] {
                    return Err(CodecError::CorruptStream(format!(
                        "symbol {} appears twice in the trie",
                        sym
                    )));
                }
                seen[sym as usize] = true;
                preorder.push(Some(sym));
            } else {
                internal += 1;
                if internal >= R {
                    return Err(CodecError::CorruptStream(
                        "trie has more than 255 internal nodes".to_string(),
                    ));
                }
                preorder.push(None);
                pending += 2;
            }
        }
        trace!("Read a trie of {} nodes, ending at {}.", preorder.len(), br.loc());
        Trie::from_preorder(&preorder)
    }

    /// Decode one symbol: walk from the root taking a bit per internal node, 0 left, 1 right.
    /// A lone leaf still consumes its 1 bit code, which must be 0.
    pub fn decode_symbol<I: Read>(&self, br: &mut BitReader<I>) -> Result<u8> {
        let mut node = self.root;
        if let NodeData::Leaf(sym) = self.nodes[node].node_data {
            if br.bool_bit()? {
                return Err(CodecError::CorruptStream(format!(
                    "bit 1 is not a code in a one symbol trie, at {}",
                    br.loc()
                )));
            }
            return Ok(sym);
        }
        loop {
            match self.nodes[node].node_data {
                NodeData::Leaf(sym) => return Ok(sym),
                NodeData::Kids(left, right) => {
                    node = if br.bool_bit()? { right } else { left };
                }
            }
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Leaf symbols in left-to-right order.
    pub fn leaves(&self) -> Vec<u8> {
        self.preorder().into_iter().flatten().collect()
    }
}

/// Running out of bits inside the trie means the trie itself is malformed.
fn truncated<T>(result: Result<T>) -> Result<T> {
    result.map_err(|e| match e {
        CodecError::EndOfStream => CodecError::CorruptStream("trie is truncated".to_string()),
        other => other,
    })
}
