//! Huffman tree construction and code derivation.
//!
//! The tree is rebuilt independently by the encoder and the decoder from the
//! same [`FrequencyTable`], so construction must be a pure function of the
//! counts. Ties between equal weights are broken by an ordinal: leaves take
//! their symbol value (0-255), merged nodes take 256 plus their creation
//! index. The lower ordinal is popped first and the first popped node becomes
//! the left child.

use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A node of a Huffman tree.
///
/// Internal nodes own their children exclusively; traversal is top-down only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol with its count.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Occurrence count.
        weight: u64,
    },
    /// Merge of two subtrees.
    Internal {
        /// Subtree reached by a 0 bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a 1 bit.
        right: Box<HuffmanNode>,
        /// `left.weight() + right.weight()`.
        weight: u64,
    },
}

impl HuffmanNode {
    /// Combined weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        let weight = left.weight() + right.weight();
        Self::Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
        }
    }
}

/// Heap entry ordered by `(weight, ordinal)`.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    ordinal: u32,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.ordinal).cmp(&(other.weight, other.ordinal))
    }
}

/// Code of one symbol: `length` bits, bit `i` of `bits` being the branch
/// taken at depth `i` (0 = left, 1 = right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeEntry {
    /// Number of bits; 0 for symbols that never occur.
    pub length: u8,
    /// Path from the root, first branch in bit 0.
    pub bits: u64,
}

impl CodeEntry {
    /// Render the code in transmission order, e.g. `"0110"`.
    pub fn to_bit_string(&self) -> String {
        (0..self.length)
            .map(|i| if (self.bits >> i) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

/// Per-symbol codes derived from a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: [CodeEntry; SYMBOL_COUNT],
}

impl CodeTable {
    /// Code of one symbol.
    pub fn get(&self, symbol: u8) -> CodeEntry {
        self.entries[symbol as usize]
    }

    /// Iterate over `(symbol, code)` for every symbol that has a code.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (u8, CodeEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.length > 0)
            .map(|(symbol, &e)| (symbol as u8, e))
    }

    /// Longest code length in the table.
    pub fn max_length(&self) -> u8 {
        self.entries.iter().map(|e| e.length).max().unwrap_or(0)
    }
}

/// A Huffman tree over the byte alphabet.
///
/// Empty when no symbol occurs; a single leaf when only one symbol occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffmanNode>,
}

impl HuffmanTree {
    /// Build the tree for the given counts.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Self {
        let mut heap: BinaryHeap<Reverse<QueueEntry>> = frequencies
            .iter_nonzero()
            .map(|(symbol, count)| {
                Reverse(QueueEntry {
                    weight: count as u64,
                    ordinal: symbol as u32,
                    node: HuffmanNode::Leaf {
                        symbol,
                        weight: count as u64,
                    },
                })
            })
            .collect();

        let mut next_ordinal = SYMBOL_COUNT as u32;
        loop {
            let Some(Reverse(first)) = heap.pop() else {
                return Self { root: None };
            };
            let Some(Reverse(second)) = heap.pop() else {
                return Self {
                    root: Some(first.node),
                };
            };

            let merged = HuffmanNode::merge(first.node, second.node);
            heap.push(Reverse(QueueEntry {
                weight: merged.weight(),
                ordinal: next_ordinal,
                node: merged,
            }));
            next_ordinal += 1;
        }
    }

    /// Root node, if any symbol occurs.
    pub fn root(&self) -> Option<&HuffmanNode> {
        self.root.as_ref()
    }

    /// Whether the tree has no leaves.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&HuffmanNode> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => count += 1,
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        count
    }

    /// Derive the code of every leaf by a depth-first walk.
    ///
    /// A tree made of a single leaf gives that symbol the one-bit code `0`.
    pub fn code_table(&self) -> CodeTable {
        let mut entries = [CodeEntry::default(); SYMBOL_COUNT];

        match &self.root {
            None => {}
            Some(HuffmanNode::Leaf { symbol, .. }) => {
                entries[*symbol as usize] = CodeEntry { length: 1, bits: 0 };
            }
            Some(root) => {
                let mut stack: Vec<(&HuffmanNode, u64, u8)> = vec![(root, 0, 0)];
                while let Some((node, bits, length)) = stack.pop() {
                    match node {
                        HuffmanNode::Leaf { symbol, .. } => {
                            entries[*symbol as usize] = CodeEntry { length, bits };
                        }
                        HuffmanNode::Internal { left, right, .. } => {
                            stack.push((right.as_ref(), bits | (1u64 << length), length + 1));
                            stack.push((left.as_ref(), bits, length + 1));
                        }
                    }
                }
            }
        }

        CodeTable { entries }
    }
}
