//! BitReader: reads packed bytes back as a stream of bits, most significant bit first.

use log::debug;

use crate::error::{Result, SeqError};

const BIT_MASK: u8 = 0xff;

/// Reads bits out of a packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<bool>, or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = (byte & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit == 1)
    }

    /// Bits not yet read.
    pub fn remaining(&self) -> usize {
        (self.buffer.len() * 8).saturating_sub(self.cursor * 8 + self.bit_index)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bit()
    }
}

/// Expand packed bytes into bits and drop the last `padding` bits.
pub fn unpack(bytes: &[u8], padding: u8) -> Result<Vec<bool>> {
    if padding > 7 {
        return Err(SeqError::MalformedArtifact(format!(
            "padding of {} bits is more than 7",
            padding
        )));
    }
    let mut br = BitReader::new(bytes);
    let total = br.remaining();
    if (padding as usize) > total {
        return Err(SeqError::MalformedArtifact(format!(
            "padding of {} bits but only {} bits packed",
            padding, total
        )));
    }
    let bits: Vec<bool> = br.by_ref().take(total - padding as usize).collect();
    debug!(
        "Unpacked {} bytes into {} bits, stopped at {} with {} padding bits left.",
        bytes.len(),
        bits.len(),
        br.loc(),
        br.remaining()
    );
    Ok(bits)
}
