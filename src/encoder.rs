use log::{debug, error};

use crate::error::HuffmanError;
use crate::huffman::{BitSeq, CodeTable};

/// Concatenates the code of each input symbol, in input order, into a single
/// bit sequence. Fails with [`HuffmanError::UnknownSymbol`] if a symbol has
/// no entry in the table.
pub fn encode(data: &[u8], code_table: &CodeTable) -> Result<BitSeq, HuffmanError> {
    debug!("encoding {} symbols", data.len());

    let mut bits = BitSeq::with_capacity(data.len());
    for &byte in data {
        match code_table.get(&byte) {
            Some(code) => bits.extend_from_bitslice(code.as_bitslice()),
            None => {
                error!("symbol {:#04x} found in data but not in code table", byte);
                return Err(HuffmanError::UnknownSymbol(byte));
            }
        }
    }

    debug!("encoded {} symbols into {} bits", data.len(), bits.len());
    Ok(bits)
}
