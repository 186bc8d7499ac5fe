//! Sequence validation: normalizes raw text, checks alphabet membership and appends the
//! sentinel that makes every rotation of the sequence unique.

use log::{debug, trace};

use crate::error::{Result, SeqError};

/// Reserved end-of-sequence marker. Sorts before every alphabet symbol.
pub const SENTINEL: u8 = b'$';

/// Nucleotides plus the ambiguity symbol.
pub const DNA: &str = "ACGNT";

/// Set of symbols accepted by the validator. Membership is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    members: [bool; 256],
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Build an alphabet from a list of symbols. The list is upper-cased and deduplicated.
    /// Every symbol must be visible ASCII and sort strictly after the sentinel.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut members = [false; 256];
        let mut list = Vec::with_capacity(symbols.len());
        for ch in symbols.chars() {
            if !ch.is_ascii_graphic() {
                return Err(SeqError::InvalidAlphabetConfig(format!(
                    "{:?} is not a printable ASCII symbol",
                    ch
                )));
            }
            let byte = ch.to_ascii_uppercase() as u8;
            if byte <= SENTINEL {
                return Err(SeqError::InvalidAlphabetConfig(format!(
                    "{:?} does not sort after the sentinel {:?}",
                    ch, SENTINEL as char
                )));
            }
            if !members[byte as usize] {
                members[byte as usize] = true;
                list.push(byte);
            }
        }
        if list.is_empty() {
            return Err(SeqError::InvalidAlphabetConfig(
                "alphabet has no symbols".to_string(),
            ));
        }
        list.sort_unstable();
        Ok(Self {
            members,
            symbols: list,
        })
    }

    /// Default alphabet: A, C, G, N, T.
    pub fn dna() -> Self {
        let mut members = [false; 256];
        DNA.bytes().for_each(|b| members[b as usize] = true);
        Self {
            members,
            symbols: DNA.as_bytes().to_vec(),
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.members[symbol as usize]
    }

    /// Symbols in ascending order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Strip whitespace, upper-case and check membership. Does not add the sentinel.
    pub fn normalize(&self, raw: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(raw.len());
        for (position, ch) in raw.chars().enumerate().filter(|(_, c)| !c.is_whitespace()) {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii() || !self.contains(upper as u8) {
                return Err(SeqError::InvalidAlphabet {
                    symbol: ch,
                    position,
                });
            }
            out.push(upper as u8);
        }
        if out.is_empty() {
            return Err(SeqError::EmptyInput);
        }
        trace!("Normalized {} symbols.", out.len());
        Ok(out)
    }

    /// Normalize and append the sentinel.
    pub fn validate(&self, raw: &str) -> Result<ValidSequence> {
        let mut symbols = self.normalize(raw)?;
        symbols.push(SENTINEL);
        debug!("Validated sequence of {} symbols (with sentinel).", symbols.len());
        Ok(ValidSequence { symbols })
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

/// A normalized sequence whose last (and only last) symbol is the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSequence {
    symbols: Vec<u8>,
}

impl ValidSequence {
    /// Full sequence including the trailing sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Sequence without the sentinel.
    pub fn body(&self) -> &[u8] {
        &self.symbols[..self.symbols.len() - 1]
    }

    /// Length including the sentinel.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true: a valid sequence holds at least one symbol and the sentinel.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

/// Validate `raw` against the default DNA alphabet.
pub fn validate(raw: &str) -> Result<ValidSequence> {
    Alphabet::dna().validate(raw)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn appends_sentinel() {
        let seq = validate("ACGT").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT$");
        assert_eq!(seq.body(), b"ACGT");
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn strips_line_endings_and_uppercases() {
        let seq = validate("acg\r\ntn\n").unwrap();
        assert_eq!(seq.as_str(), "ACGTN$");
    }

    #[test]
    fn rejects_foreign_symbol() {
        match validate("ACGTX") {
            Err(SeqError::InvalidAlphabet { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 4);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn position_counts_whitespace() {
        match validate("AC\nX") {
            Err(SeqError::InvalidAlphabet { symbol, position }) => {
                assert_eq!(symbol, 'X');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_sentinel_in_input() {
        assert!(matches!(
            validate("AC$G"),
            Err(SeqError::InvalidAlphabet { symbol: '$', .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(validate(""), Err(SeqError::EmptyInput)));
        assert!(matches!(validate(" \n\t"), Err(SeqError::EmptyInput)));
    }

    #[test]
    fn custom_alphabet() {
        let ab = Alphabet::new("acgu").unwrap();
        assert_eq!(ab.symbols(), b"ACGU");
        assert!(ab.validate("ACGU").is_ok());
        assert!(ab.validate("ACGT").is_err());
        assert_eq!(Alphabet::new("TTAA").unwrap().symbols(), b"AT");
    }

    #[test]
    fn alphabet_must_sort_after_sentinel() {
        assert!(matches!(
            Alphabet::new("AC#"),
            Err(SeqError::InvalidAlphabetConfig(_))
        ));
        assert!(matches!(
            Alphabet::new("A$"),
            Err(SeqError::InvalidAlphabetConfig(_))
        ));
        assert!(matches!(
            Alphabet::new(""),
            Err(SeqError::InvalidAlphabetConfig(_))
        ));
    }

    #[test]
    fn dna_matches_parsed() {
        assert_eq!(Alphabet::dna(), Alphabet::new(DNA).unwrap());
    }
}
