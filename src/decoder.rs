use bitvec::prelude::*;
use log::debug;

use crate::error::HuffmanError;
use crate::huffman::Node;

/// Walks the tree bit by bit, emitting a symbol at each leaf and restarting
/// at the root. Fails with [`HuffmanError::TruncatedInput`] if the bit
/// stream ends in the middle of a code.
///
/// `root` must be the tree the bit sequence was encoded with; a mismatched
/// tree produces unspecified output without signaling.
pub fn decode(bits: &BitSlice<u8, Msb0>, root: &Node) -> Result<Vec<u8>, HuffmanError> {
    debug!("decoding {} bits", bits.len());

    // A lone leaf has no branches to walk; every bit stands for the one
    // symbol in the alphabet.
    if let Node::Leaf { symbol, .. } = root {
        return Ok(vec![*symbol; bits.len()]);
    }

    let mut decoded = Vec::new();
    let mut input = bits.iter().by_vals();

    'stream: loop {
        let mut current = root;
        while let Node::Internal { left, right, .. } = current {
            let Some(bit) = input.next() else {
                if std::ptr::eq(current, root) {
                    // All bits consumed with the walk back at the root.
                    break 'stream;
                }
                return Err(HuffmanError::TruncatedInput {
                    decoded: decoded.len(),
                });
            };
            current = if bit { right } else { left };
        }

        if let Node::Leaf { symbol, .. } = current {
            decoded.push(*symbol);
        }
    }

    debug!("decoded {} symbols", decoded.len());
    Ok(decoded)
}
