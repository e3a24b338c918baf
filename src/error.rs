use thiserror::Error;

/// Errors surfaced by tree construction, encoding and decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// There were no symbols to build a tree from.
    #[error("input is empty, nothing to build a tree from")]
    EmptyInput,

    /// The encoder hit a symbol with no entry in the code table.
    #[error("symbol {0:#04x} has no entry in the code table")]
    UnknownSymbol(u8),

    /// The bit stream ended in the middle of a code.
    #[error("bit stream ended mid-code after {decoded} decoded symbols")]
    TruncatedInput {
        /// Symbols successfully decoded before the stream ran out.
        decoded: usize,
    },
}
