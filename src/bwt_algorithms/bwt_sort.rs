use log::{debug, info};
use std::cmp::Ordering;

use crate::tools::alphabet::ValidSequence;

/// The sorted set of cyclic rotations of a sequence. Rotations are kept as start offsets into
/// the sequence, so a row is only materialized when asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTable {
    data: Vec<u8>,
    index: Vec<u32>,
}

impl RotationTable {
    /// Number of rotations (equal to the sequence length).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The i-th rotation in sorted order.
    pub fn row(&self, i: usize) -> Vec<u8> {
        let start = self.index[i] as usize;
        let mut row = Vec::with_capacity(self.data.len());
        row.extend_from_slice(&self.data[start..]);
        row.extend_from_slice(&self.data[..start]);
        row
    }

    /// All rotations in sorted order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }

    /// Position of the unrotated sequence in sorted order. None only for an empty table.
    pub fn key(&self) -> Option<usize> {
        self.index.iter().position(|&i| i == 0)
    }

    /// Last column of the sorted rotations, i.e. the transformed sequence.
    pub fn last_column(&self) -> Vec<u8> {
        let end = self.data.len();
        self.index
            .iter()
            .map(|&i| {
                if i == 0 {
                    self.data[end - 1]
                } else {
                    self.data[i as usize - 1]
                }
            })
            .collect()
    }
}

/// Sort every cyclic rotation of `data`. Ties cannot occur when `data` carries a unique
/// sentinel; without one, equal rotations keep their offset order.
pub fn bwt_encode(data: &[u8]) -> RotationTable {
    let mut index = (0_u32..data.len() as u32).collect::<Vec<u32>>();
    index.sort_by(|a, b| block_compare(*a as usize, *b as usize, data));
    RotationTable {
        data: data.to_vec(),
        index,
    }
}

/// Burrows-Wheeler transform of a validated sequence. Returns the transformed sequence and the
/// sorted rotation table it was read from.
pub fn forward(seq: &ValidSequence) -> (Vec<u8>, RotationTable) {
    let table = bwt_encode(seq.as_bytes());
    let bwt = table.last_column();
    info!("Sorted {} rotations.", table.len());
    debug!("Original sequence sorts to row {:?}.", table.key());
    (bwt, table)
}

/// Compare the rotations starting at `a` and `b` without building them.
fn block_compare(a: usize, b: usize, block: &[u8]) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let (lo, hi, flip) = if a < b { (a, b, false) } else { (b, a, true) };
    let end = block.len();

    // Until `hi` reaches the end of the block
    let head = end - hi;
    let mut result = block[lo..lo + head].cmp(&block[hi..]);

    // `lo` runs on to the end while `hi` wraps around to the front
    if result == Ordering::Equal {
        let mid = hi - lo;
        result = block[lo + head..].cmp(&block[..mid]);

        // Both wrapped
        if result == Ordering::Equal {
            result = block[..lo].cmp(&block[mid..hi]);
        }
    }

    if flip {
        result.reverse()
    } else {
        result
    }
}
