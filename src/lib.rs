//! In-memory Huffman coding.
//!
//! Builds a prefix-free binary code for the bytes of an input sequence and
//! uses it to losslessly encode and decode that sequence: frequency
//! counting, tree construction over a priority queue, code-table derivation
//! by tree traversal, bit-sequence encoding and tree-guided decoding.
//!
//! ```rust
//! use huffman_codec::{build_code_table, build_tree, decode, encode};
//!
//! let data = b"abracadabra";
//! let tree = build_tree(data)?;
//! let table = build_code_table(&tree);
//!
//! let bits = encode(data, &table)?;
//! assert!(bits.len() < data.len() * 8);
//!
//! let decoded = decode(&bits, &tree)?;
//! assert_eq!(decoded, data);
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```
//!
//! The tree is the single shared artifact between the encode and decode
//! paths. Construction breaks frequency ties deterministically, so callers
//! may either share one tree across both calls or rebuild an identical tree
//! from the same frequency table.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod huffman;

pub use decoder::decode;
pub use encoder::encode;
pub use error::HuffmanError;
pub use huffman::{
    BitSeq, CodeTable, FreqTable, HuffmanTree, Node, Symbol, build_code_table,
    build_huffman_tree, build_tree, count_frequencies, entropy_from_freq,
};
