use log::{debug, info};

use super::artifact::Artifact;
use crate::bitstream::bitpacker::pack;
use crate::bwt_algorithms::bwt_sort::forward;
use crate::error::Result;
use crate::huffman_coding::huffman::huf_encode;
use crate::tools::options::SeqOpts;

/// An artifact together with the intermediate values that produced it.
#[derive(Debug, Clone)]
pub struct CompressReport {
    /// The sequence handed to the Huffman stage
    pub coded: Vec<u8>,
    /// Concatenated code bits, before padding
    pub bits: Vec<bool>,
    pub artifact: Artifact,
}

/// Huffman code and pack a sequence.
fn encode_block(coded: Vec<u8>) -> Result<CompressReport> {
    let (table, bits) = huf_encode(&coded)?;
    let (padding, packed) = pack(&bits);
    debug!(
        "{} symbols -> {} bits -> {} bytes (+{} padding bits).",
        coded.len(),
        bits.len(),
        packed.len(),
        padding
    );
    Ok(CompressReport {
        coded,
        bits,
        artifact: Artifact::new(table, padding, packed),
    })
}

/// Compress a sequence as is. The input is normalized and checked against the alphabet but
/// no sentinel is added, so decompression gives back exactly the normalized input.
pub fn compress_report(raw: &str, opts: &SeqOpts) -> Result<CompressReport> {
    let data = opts.alphabet.normalize(raw)?;
    info!("Compressing {} symbols.", data.len());
    encode_block(data)
}

/// Apply the Burrows-Wheeler transform, then compress the transformed sequence. The
/// sentinel travels inside the compressed data.
pub fn compress_transformed_report(raw: &str, opts: &SeqOpts) -> Result<CompressReport> {
    let seq = opts.alphabet.validate(raw)?;
    let (bwt, _) = forward(&seq);
    info!("Compressing {} transformed symbols.", bwt.len());
    encode_block(bwt)
}

pub fn compress(raw: &str, opts: &SeqOpts) -> Result<Artifact> {
    compress_report(raw, opts).map(|r| r.artifact)
}

pub fn compress_transformed(raw: &str, opts: &SeqOpts) -> Result<Artifact> {
    compress_transformed_report(raw, opts).map(|r| r.artifact)
}
