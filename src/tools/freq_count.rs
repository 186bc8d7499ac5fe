use crate::error::{Result, SeqError};

/// Symbol counts for one sequence. Remembers the order in which symbols first appeared so
/// that tree construction is reproducible for equal weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u32; 256],
    order: Vec<u8>,
}

impl FreqTable {
    /// Count of one symbol (0 if absent).
    pub fn count(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// (symbol, count) pairs in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.order.iter().map(|&s| (s, self.counts[s as usize]))
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> Result<FreqTable> {
    if data.is_empty() {
        return Err(SeqError::EmptyInput);
    }
    let mut counts = [0_u32; 256];
    let mut order = Vec::new();
    data.iter().for_each(|&el| {
        if counts[el as usize] == 0 {
            order.push(el);
        }
        counts[el as usize] += 1;
    });
    Ok(FreqTable { counts, order })
}
