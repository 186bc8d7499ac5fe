use log::info;

use super::artifact::Artifact;
use super::transform::ascii_string;
use crate::bitstream::bitreader::unpack;
use crate::bwt_algorithms::bwt_inverse::inverse;
use crate::error::Result;
use crate::tools::options::SeqOpts;

/// Decoded symbols together with the bit string they were decoded from.
#[derive(Debug, Clone)]
pub struct DecompressReport {
    pub bits: Vec<bool>,
    pub symbols: String,
}

pub fn decompress_report(artifact: &Artifact) -> Result<DecompressReport> {
    let bits = unpack(&artifact.packed, artifact.padding)?;
    let decoded = artifact.table.decode(&bits)?;
    info!("Decompressed {} symbols.", decoded.len());
    Ok(DecompressReport {
        bits,
        symbols: ascii_string(decoded)?,
    })
}

/// Unpack and decode an artifact. A sentinel, if the data was transformed, is kept.
pub fn decompress(artifact: &Artifact) -> Result<String> {
    decompress_report(artifact).map(|r| r.symbols)
}

/// Decompress, then undo the transform. The sentinel is stripped.
pub fn decompress_and_invert(artifact: &Artifact, opts: &SeqOpts) -> Result<String> {
    let decoded = decompress(artifact)?;
    let original = inverse(decoded.as_bytes(), opts.inverse)?;
    ascii_string(original)
}
