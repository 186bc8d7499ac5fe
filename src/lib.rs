//! Lossless codec for short DNA sequences.
//!
//! Version 0.1.0
//!
//! Two stages that can be used alone or chained: a Burrows-Wheeler transform of the
//! sentinel-terminated sequence, and a Huffman coder whose bits are packed into bytes and
//! stored with their code table as a small text artifact.
//!
//! Basic usage to transform and compress a file is as follows:
//!
//! `$> seqzip compress-bwt reads.txt`
//!
//! This writes reads_bwt_compressed.txt next to the input.
//! `seqzip decompress-invert reads_bwt_compressed.txt` gives the sequence back.
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::artifact::Artifact;
pub use compression::compress::{compress, compress_transformed};
pub use compression::decompress::{decompress, decompress_and_invert};
pub use compression::transform::{transform_forward, transform_inverse, Transformed};
pub use error::{Result, SeqError};
pub use tools::alphabet::{validate, Alphabet, ValidSequence, SENTINEL};
pub use tools::options::{InverseAlgorithm, SeqOpts};
