use log::info;

use crate::bwt_algorithms::bwt_inverse::inverse;
use crate::bwt_algorithms::bwt_sort::{forward, RotationTable};
use crate::error::{Result, SeqError};
use crate::tools::options::SeqOpts;

/// Result of a forward transform.
#[derive(Debug, Clone)]
pub struct Transformed {
    /// The validated input, sentinel included
    pub sequence: String,
    /// The transformed sequence
    pub bwt: String,
    /// Sorted rotations the transform was read from
    pub rotations: RotationTable,
}

/// Validate `raw` and apply the Burrows-Wheeler transform.
pub fn transform_forward(raw: &str, opts: &SeqOpts) -> Result<Transformed> {
    let seq = opts.alphabet.validate(raw)?;
    let (bwt, rotations) = forward(&seq);
    info!("Transformed {} symbols.", bwt.len());
    Ok(Transformed {
        sequence: seq.as_str().to_string(),
        bwt: ascii_string(bwt)?,
        rotations,
    })
}

/// Undo the transform. Whitespace is ignored; the returned sequence has no sentinel.
pub fn transform_inverse(transformed: &str, opts: &SeqOpts) -> Result<String> {
    let bwt: Vec<u8> = transformed
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c.is_ascii() {
                Ok(c as u8)
            } else {
                Err(SeqError::MalformedTransform(format!(
                    "{:?} cannot appear in a transformed sequence",
                    c
                )))
            }
        })
        .collect::<Result<Vec<u8>>>()?;
    let original = inverse(&bwt, opts.inverse)?;
    info!("Reconstructed {} symbols.", original.len());
    ascii_string(original)
}

/// Symbols are single ASCII bytes everywhere in the codec.
pub(crate) fn ascii_string(symbols: Vec<u8>) -> Result<String> {
    String::from_utf8(symbols)
        .map_err(|e| SeqError::MalformedTransform(format!("non-ASCII symbols: {}", e)))
}
