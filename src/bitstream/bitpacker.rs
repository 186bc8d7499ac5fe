use log::{debug, error};

/// Packs a stream of bits into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Zero bits added by flush() to fill the last byte (0-7).
    pub padding: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with room for `size` bytes. Call flush() once all bits are in.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            padding: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Move every whole byte from the queue to the output.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue = (self.queue << 1) | bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts a run of bits on the stream, first bit first.
    pub fn out_bits(&mut self, bits: &[bool]) {
        bits.iter().for_each(|&b| self.out_bit(b));
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits, and records how many were added.
    pub fn flush(&mut self) {
        self.padding = (8 - self.q_bits % 8) % 8;
        if self.q_bits > 0 {
            self.queue <<= self.padding;
            self.q_bits += self.padding;
            self.write_stream();
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        let total = self.output.len() * 8 + self.q_bits as usize;
        format!("[{}.{}]", total / 8, total % 8)
    }
}

/// Pack a bit string into bytes. Returns the number of zero bits appended to fill the last
/// byte and the packed bytes.
pub fn pack(bits: &[bool]) -> (u8, Vec<u8>) {
    let mut bp = BitPacker::new(bits.len() / 8 + 1);
    bp.out_bits(bits);
    bp.flush();
    debug!(
        "Packed {} bits into {} bytes with {} padding bits, ending at {}.",
        bits.len(),
        bp.output.len(),
        bp.padding,
        bp.loc()
    );
    (bp.padding, bp.output)
}
