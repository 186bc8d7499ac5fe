//! Error taxonomy shared by every stage of the codec.
//!
//! Every core operation returns one of these variants rather than panicking. A single
//! symbol input (a "degenerate" alphabet) is handled by the Huffman stage and is not an
//! error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    /// Nothing left to work on after whitespace was stripped.
    #[error("input is empty")]
    EmptyInput,

    /// A symbol outside the configured alphabet. `position` is the character offset in the
    /// raw input, whitespace included.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidAlphabet { symbol: char, position: usize },

    /// The configured alphabet itself is unusable.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabetConfig(String),

    /// The inverse transform did not converge to exactly one sentinel-terminated row.
    #[error("malformed transform: {0}")]
    MalformedTransform(String),

    /// The code table has no entry for a symbol being encoded.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// The bit stream ended (or overran the longest code) in the middle of a codeword.
    #[error("undecodable bits: {pending} pending bits after {consumed} bits consumed")]
    UndecodableBits { consumed: usize, pending: usize },

    /// The artifact record could not be split into code table, padding and packed bytes.
    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeqError>;
