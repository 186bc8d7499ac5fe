/// seqzip options - structs and impls for everything the user can set
use std::{fmt::Display, fmt::Formatter};

use super::alphabet::Alphabet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The six operations the program can run
pub enum Mode {
    Transform,
    Invert,
    Compress,
    CompressBwt,
    Decompress,
    DecompressInvert,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a count of -v flags to a verbosity.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Errors,
            1 => Verbosity::Warnings,
            2 => Verbosity::Info,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Algorithm used to undo the Burrows-Wheeler transform
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InverseAlgorithm {
    /// Prepend the transform as a column and re-sort, once per symbol
    ColumnSort,
    /// Follow the last-to-first mapping from the sentinel row
    LastToFirst,
}

#[derive(Debug, Clone)]
/// Defines all user settable options to control program behavior
pub struct SeqOpts {
    /// Symbols accepted in input sequences
    pub alphabet: Alphabet,
    /// Algorithm used for the inverse transform
    pub inverse: InverseAlgorithm,
    /// Operation requested
    pub op_mode: Mode,
    /// Optional name of file to read for input
    pub file: Option<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Print the intermediate sequences
    pub show: bool,
    /// User feedback level setting
    pub verbose: Verbosity,
}

impl SeqOpts {
    /// Instantiated on program start - sets default parameters
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::dna(),
            inverse: InverseAlgorithm::ColumnSort,
            op_mode: Mode::Compress,
            file: None,
            force_overwrite: false,
            show: false,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for SeqOpts {
    fn default() -> Self {
        Self::new()
    }
}
