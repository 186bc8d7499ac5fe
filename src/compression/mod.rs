//! The compression module exposes the six operations of the codec.
//!
//! - transform_forward: validate, append the sentinel, Burrows-Wheeler transform.
//! - transform_inverse: rebuild the original sequence from a transformed one.
//! - compress: Huffman code the sequence and pack the bits into an artifact.
//! - compress_transformed: transform first, then compress the transformed sequence.
//! - decompress: unpack and decode an artifact.
//! - decompress_and_invert: decompress, then undo the transform.
//!
//! Every operation is a pure function of its inputs. Reading and writing files is left to the
//! caller (see `tools::files`).
//!
pub mod artifact;
pub mod compress;
pub mod decompress;
pub mod transform;
