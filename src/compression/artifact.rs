use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, SeqError};
use crate::huffman_coding::code_table::{parse_bits, render_bits, CodeTable};

/// Everything needed to decompress: the code table, how many padding bits close the packed
/// stream, and the packed bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub table: CodeTable,
    pub padding: u8,
    pub packed: Vec<u8>,
}

/// First line of a persisted artifact: one key per symbol holding its code, then "add".
/// Symbol keys are written in sorted order ahead of "add".
#[derive(Serialize, Deserialize, Debug)]
struct Header {
    #[serde(flatten)]
    codes: BTreeMap<String, String>,
    add: u8,
}

impl Artifact {
    pub fn new(table: CodeTable, padding: u8, packed: Vec<u8>) -> Self {
        Self {
            table,
            padding,
            packed,
        }
    }

    /// Textual record: the JSON header line, a newline, then one character per packed byte
    /// whose code point is the byte value.
    pub fn serialize(&self) -> Result<String> {
        let header = Header {
            add: self.padding,
            codes: self
                .table
                .iter()
                .map(|(sym, code)| ((sym as char).to_string(), render_bits(code)))
                .collect(),
        };
        let mut text = serde_json::to_string(&header)
            .map_err(|e| SeqError::MalformedArtifact(e.to_string()))?;
        text.push('\n');
        text.extend(self.packed.iter().map(|&b| char::from(b)));
        debug!(
            "Serialized artifact: {} codes, {} packed bytes.",
            self.table.len(),
            self.packed.len()
        );
        Ok(text)
    }

    /// Exact inverse of [`Artifact::serialize`].
    pub fn deserialize(text: &str) -> Result<Self> {
        let (head, body) = text
            .split_once('\n')
            .ok_or_else(|| SeqError::MalformedArtifact("missing header line".to_string()))?;
        let header: Header = serde_json::from_str(head)
            .map_err(|e| SeqError::MalformedArtifact(format!("header: {}", e)))?;
        if header.add > 7 {
            return Err(SeqError::MalformedArtifact(format!(
                "padding of {} bits is more than 7",
                header.add
            )));
        }

        let mut codes = BTreeMap::new();
        for (key, value) in header.codes {
            let mut chars = key.chars();
            let sym = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => c as u8,
                _ => {
                    return Err(SeqError::MalformedArtifact(format!(
                        "{:?} is not a single symbol",
                        key
                    )))
                }
            };
            let code = parse_bits(&value).ok_or_else(|| {
                SeqError::MalformedArtifact(format!("code {:?} for {:?} is not binary", value, key))
            })?;
            trace!("Read code {} for {:?}.", value, key);
            codes.insert(sym, code);
        }
        let table = CodeTable::new(codes);
        if table.is_empty() {
            return Err(SeqError::MalformedArtifact("no codes".to_string()));
        }
        if !table.is_prefix_free() {
            return Err(SeqError::MalformedArtifact(
                "codes are not prefix-free".to_string(),
            ));
        }

        let packed = body
            .chars()
            .map(|c| {
                u8::try_from(c).map_err(|_| {
                    SeqError::MalformedArtifact(format!("{:?} is not a packed byte", c))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        debug!(
            "Deserialized artifact: {} codes, {} packed bytes.",
            table.len(),
            packed.len()
        );
        Ok(Self {
            table,
            padding: header.add,
            packed,
        })
    }
}
