use log::trace;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

use crate::error::{Result, SeqError};

/// Mapping from symbol to its code bits, most significant (first emitted) bit first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: BTreeMap<u8, Vec<bool>>,
}

impl CodeTable {
    pub fn new(codes: BTreeMap<u8, Vec<bool>>) -> Self {
        Self { codes }
    }

    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|c| c.as_slice())
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True when every code is non-empty and no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Vec<bool>> = self.codes.values().collect();
        if codes.iter().any(|c| c.is_empty()) {
            return false;
        }
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                if a.starts_with(b) || b.starts_with(a) {
                    return false;
                }
            }
        }
        true
    }

    /// Concatenate the code of every symbol of `data`, in order.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<bool>> {
        let mut bits = Vec::with_capacity(data.len() * 2);
        for &sym in data {
            let code = self
                .codes
                .get(&sym)
                .ok_or(SeqError::UnknownSymbol(sym as char))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }

    /// Greedy decode: grow a pending prefix one bit at a time and emit a symbol as soon as the
    /// prefix equals a code.
    pub fn decode(&self, bits: &[bool]) -> Result<Vec<u8>> {
        let lookup: FxHashMap<&[bool], u8> =
            self.codes.iter().map(|(&s, c)| (c.as_slice(), s)).collect();
        let longest = self.codes.values().map(|c| c.len()).max().unwrap_or(0);

        let mut out = Vec::with_capacity(bits.len() / 2 + 1);
        let mut start = 0;
        for end in 1..=bits.len() {
            let pending = &bits[start..end];
            if let Some(&sym) = lookup.get(pending) {
                out.push(sym);
                start = end;
            } else if pending.len() >= longest {
                return Err(SeqError::UndecodableBits {
                    consumed: start,
                    pending: pending.len(),
                });
            }
        }
        if start != bits.len() {
            return Err(SeqError::UndecodableBits {
                consumed: start,
                pending: bits.len() - start,
            });
        }
        trace!("Decoded {} bits into {} symbols.", bits.len(), out.len());
        Ok(out)
    }
}

/// Render bits as a string of '0' and '1'.
pub fn render_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Parse a string of '0' and '1'. Returns None on any other character.
pub fn parse_bits(text: &str) -> Option<Vec<bool>> {
    text.chars()
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(pairs: &[(u8, &str)]) -> CodeTable {
        CodeTable::new(
            pairs
                .iter()
                .map(|&(s, c)| (s, parse_bits(c).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn encode_and_decode() {
        let t = table(&[(b'A', "0"), (b'C', "100"), (b'G', "101"), (b'T', "11")]);
        let bits = t.encode(b"GATTACA").unwrap();
        assert_eq!(render_bits(&bits), "1010111101000");
        assert_eq!(t.decode(&bits).unwrap(), b"GATTACA");
    }

    #[test]
    fn unknown_symbol() {
        let t = table(&[(b'A', "0"), (b'C', "1")]);
        assert!(matches!(t.encode(b"ACG"), Err(SeqError::UnknownSymbol('G'))));
    }

    #[test]
    fn runs_out_mid_code() {
        let t = table(&[(b'A', "0"), (b'C', "10"), (b'G', "11")]);
        match t.decode(&parse_bits("0101").unwrap()) {
            Err(SeqError::UndecodableBits { consumed, pending }) => {
                assert_eq!(consumed, 3);
                assert_eq!(pending, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn pending_longer_than_any_code() {
        // Not a complete code: "11" never matches.
        let t = table(&[(b'A', "0"), (b'C', "10")]);
        assert!(matches!(
            t.decode(&parse_bits("0110").unwrap()),
            Err(SeqError::UndecodableBits { consumed: 1, pending: 2 })
        ));
    }

    #[test]
    fn empty_bits_decode_to_nothing() {
        let t = table(&[(b'A', "0")]);
        assert_eq!(t.decode(&[]).unwrap(), b"");
    }

    #[test]
    fn prefix_check() {
        assert!(table(&[(b'A', "0"), (b'C', "10"), (b'G', "11")]).is_prefix_free());
        assert!(!table(&[(b'A', "1"), (b'C', "10")]).is_prefix_free());
        assert!(!table(&[(b'A', ""), (b'C', "1")]).is_prefix_free());
        assert!(!table(&[(b'A', "01"), (b'C', "01")]).is_prefix_free());
    }

    #[test]
    fn bit_strings() {
        assert_eq!(parse_bits("0110"), Some(vec![false, true, true, false]));
        assert_eq!(parse_bits("01a"), None);
        assert_eq!(render_bits(&[true, false]), "10");
    }
}
