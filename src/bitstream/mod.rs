//! The bitstream module moves Huffman output between bit strings and byte-aligned storage.
//!
//! Packing appends zero bits until the stream fills a whole number of bytes and reports how
//! many were added (0-7). Unpacking needs that count to drop exactly those bits again; the
//! artifact carries it next to the packed bytes.
//!
pub mod bitpacker;
pub mod bitreader;
