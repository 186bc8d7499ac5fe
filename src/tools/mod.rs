//! The tools module provides the helpers around the codec stages.
//!
//! The tools are:
//! - alphabet: Sequence validation and the sentinel.
//! - cli: Command line interface.
//! - files: Output file naming and reading/writing of sequences and artifacts.
//! - freq_count: Symbol frequency count for the Huffman stage.
//! - options: User settable options.
//! - report: Wrapped printing of intermediate sequences.
//!
pub mod alphabet;
pub mod cli;
pub mod files;
pub mod freq_count;
pub mod options;
pub mod report;
