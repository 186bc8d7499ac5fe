use log::{debug, info, trace};

use super::bwt_sort::bwt_encode;
use crate::error::{Result, SeqError};
use crate::tools::alphabet::SENTINEL;
use crate::tools::options::InverseAlgorithm;

/// Rebuild the original sequence (sentinel stripped) from a transformed sequence.
pub fn inverse(bwt: &[u8], algorithm: InverseAlgorithm) -> Result<Vec<u8>> {
    if bwt.is_empty() {
        return Err(SeqError::EmptyInput);
    }
    let sentinels = bwt.iter().filter(|&&s| s == SENTINEL).count();
    if sentinels != 1 {
        return Err(SeqError::MalformedTransform(format!(
            "expected exactly one sentinel, found {}",
            sentinels
        )));
    }

    info!("Inverting {} symbols using {:?}.", bwt.len(), algorithm);
    let mut original = match algorithm {
        InverseAlgorithm::ColumnSort => column_sort_decode(bwt)?,
        InverseAlgorithm::LastToFirst => bwt_decode(bwt)?,
    };
    original.pop();
    Ok(original)
}

/// Iterative column-prepend reconstruction. Each pass prepends the transformed sequence as a
/// new first column and re-sorts the rows; after n passes the rows are the sorted rotations.
/// Returns the row ending in the sentinel, sentinel included.
pub fn column_sort_decode(bwt: &[u8]) -> Result<Vec<u8>> {
    let end = bwt.len();

    // Rows are stored back to front so that prepending is a push.
    let mut rows: Vec<Vec<u8>> = vec![Vec::with_capacity(end); end];
    for pass in 0..end {
        rows.iter_mut()
            .zip(bwt.iter())
            .for_each(|(row, &sym)| row.push(sym));
        rows.sort_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
        trace!("Pass {} of {}.", pass + 1, end);
    }

    // The front of a reversed row is the end of the real row.
    let mut ending = rows.iter().filter(|row| row.first() == Some(&SENTINEL));
    let candidate = match (ending.next(), ending.next()) {
        (Some(row), None) => row,
        (None, _) => {
            return Err(SeqError::MalformedTransform(
                "no reconstructed row ends in the sentinel".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(SeqError::MalformedTransform(
                "several reconstructed rows end in the sentinel".to_string(),
            ))
        }
    };
    if candidate.iter().filter(|&&s| s == SENTINEL).count() != 1 {
        return Err(SeqError::MalformedTransform(
            "reconstructed row holds more than one sentinel".to_string(),
        ));
    }
    let original: Vec<u8> = candidate.iter().rev().copied().collect();

    // Strings that are not the transform of anything still yield a sentinel row.
    if bwt_encode(&original).last_column() != bwt {
        return Err(SeqError::MalformedTransform(
            "reconstruction does not transform back to the input".to_string(),
        ));
    }
    debug!("Column sort converged after {} passes.", end);
    Ok(original)
}

/// Linear time reconstruction following the last-to-first mapping from the sentinel row.
/// Returns the original sequence, sentinel included.
pub fn bwt_decode(bwt_in: &[u8]) -> Result<Vec<u8>> {
    let end = bwt_in.len();
    let key = bwt_in
        .iter()
        .position(|&s| s == SENTINEL)
        .ok_or_else(|| SeqError::MalformedTransform("no sentinel".to_string()))?;

    // Convert the frequency count to the first row of each symbol in sorted order
    let mut freq = [0_usize; 256];
    bwt_in.iter().for_each(|&s| freq[s as usize] += 1);
    let mut total = 0;
    for slot in freq.iter_mut() {
        let count = *slot;
        *slot = total;
        total += count;
    }

    // Build the transformation vector to find the next symbol in the original data
    let mut t_vec = vec![0_usize; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        t_vec[freq[s as usize]] = i;
        freq[s as usize] += 1;
    }

    // Follow the chain once around. A valid transform is a single cycle through every row.
    let mut original = Vec::with_capacity(end);
    let mut idx = key;
    for step in 0..end {
        idx = t_vec[idx];
        original.push(bwt_in[idx]);
        if idx == key && step + 1 != end {
            return Err(SeqError::MalformedTransform(format!(
                "row cycle closes after {} of {} symbols",
                step + 1,
                end
            )));
        }
    }
    debug!("Last-to-first walk visited {} rows.", end);
    Ok(original)
}
