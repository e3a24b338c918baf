use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use bitvec::prelude::*;
use log::{Level, debug, log_enabled, trace};

use crate::error::HuffmanError;

pub type Symbol = u8;
pub type FreqTable = HashMap<Symbol, u64>;
/// Bit sequences are MSB-first within each backing byte.
pub type BitSeq = BitVec<u8, Msb0>;
pub type CodeTable = HashMap<Symbol, BitSeq>;

/// A node of the prefix tree. Internal nodes always have exactly two
/// children, so a node is a leaf iff it has none.
#[derive(Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }
}

pub type HuffmanTree = Node;

#[derive(Eq, PartialEq)]
struct HeapNode {
    freq: u64,
    seq: u64,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap (which is a
        // max-heap by default). Equal frequencies fall back to creation
        // order, oldest first, so building from the same frequency table
        // always yields the same tree.
        other.freq.cmp(&self.freq).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tallies one count per distinct byte in `data`.
pub fn count_frequencies(data: &[u8]) -> FreqTable {
    let mut freq = FreqTable::new();
    for &byte in data {
        *freq.entry(byte).or_insert(0) += 1;
    }
    freq
}

/// Shannon entropy of the distribution in bits per symbol.
pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "calculated entropy: {:.4} bits/symbol (total samples: {})",
        entropy, total
    );
    entropy
}

/// Builds the prefix tree by repeatedly merging the two lowest-frequency
/// nodes; the first node extracted becomes the left child. Leaves are seeded
/// in ascending symbol order, which together with the creation-order
/// tie-break makes construction deterministic.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<Box<HuffmanTree>, HuffmanError> {
    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    debug!(
        "building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut entries: Vec<(Symbol, u64)> = frequencies.iter().map(|(&s, &f)| (s, f)).collect();
    entries.sort_by_key(|&(symbol, _)| symbol);

    let mut heap = BinaryHeap::with_capacity(entries.len());
    let mut seq = 0u64;
    for (symbol, freq) in entries {
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf { symbol, freq }),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let left = heap.pop().unwrap();
        let right = heap.pop().unwrap();

        let freq = left.freq + right.freq;
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    }

    let root = heap
        .pop()
        .map(|n| n.node)
        .ok_or(HuffmanError::EmptyInput)?;

    if log_enabled!(Level::Trace) {
        trace_structure(&root, 0);
    }
    Ok(root)
}

/// Counts frequencies and builds the tree in one step. Fails with
/// [`HuffmanError::EmptyInput`] if `data` is empty.
pub fn build_tree(data: &[u8]) -> Result<Box<HuffmanTree>, HuffmanError> {
    build_huffman_tree(&count_frequencies(data))
}

/// Assigns every leaf symbol its path from the root: 0 for a left branch,
/// 1 for a right branch.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::new();
    assign_codes(root, BitSeq::new(), &mut table);
    table
}

fn assign_codes(node: &Node, prefix: BitSeq, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            // A root that is itself a leaf still needs a code the decoder
            // can consume, so a lone leaf gets the one-bit code 0.
            let code = if prefix.is_empty() {
                bitvec![u8, Msb0; 0]
            } else {
                prefix
            };
            trace!(
                "assigning code to symbol {:#04x} ('{}'): {}",
                symbol, *symbol as char, code
            );
            table.insert(*symbol, code);
        }
        Node::Internal { left, right, .. } => {
            let mut path = prefix.clone();
            path.push(false);
            assign_codes(left, path, table);

            let mut path = prefix;
            path.push(true);
            assign_codes(right, path, table);
        }
    }
}

// Inorder dump of the finished tree, one node per line, indented by depth.
fn trace_structure(node: &Node, indent: usize) {
    match node {
        Node::Leaf { symbol, freq } => {
            trace!(
                "{:indent$}leaf {:#04x} ('{}') freq={}",
                "",
                symbol,
                *symbol as char,
                freq,
                indent = indent
            );
        }
        Node::Internal { freq, left, right } => {
            trace_structure(left, indent + 4);
            trace!("{:indent$}internal freq={}", "", freq, indent = indent);
            trace_structure(right, indent + 4);
        }
    }
}
