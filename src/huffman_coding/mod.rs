//! The huffman_coding module is the entropy stage of the codec.
//!
//! A frequency table of the (usually transformed) sequence is turned into a Huffman tree,
//! the tree into a table of prefix-free codes, and the sequence into the concatenation of
//! its codes. The tree only lives long enough to derive the table; the table alone travels
//! with the compressed data and drives decoding.
//!
//! Sequences over a single symbol produce a tree that is a lone leaf. That symbol gets the
//! one bit code "0" so every symbol still costs one bit.
//!
pub mod code_table;
pub mod huffman;
