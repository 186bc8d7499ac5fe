use clap::{ArgAction, Parser, Subcommand};

use super::alphabet::Alphabet;
use super::options::{InverseAlgorithm, Mode, SeqOpts, Verbosity};
use crate::error::Result;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Burrows-Wheeler transform and Huffman compression of DNA sequences",
    long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Symbols accepted in input sequences (case-insensitive)
    #[clap(long, default_value = "ACGNT", global = true)]
    alphabet: String,

    /// Algorithm used to undo the transform
    #[clap(long, value_enum, default_value = "column-sort", global = true)]
    inverse: InverseAlgorithm,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force", global = true)]
    force: bool,

    /// Print the intermediate sequences
    #[clap(short = 's', long = "show", global = true)]
    show: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Burrows-Wheeler transform a sequence file
    Transform { file: String },
    /// Rebuild the original sequence from a transformed file
    Invert { file: String },
    /// Huffman compress a sequence file
    Compress { file: String },
    /// Transform, then compress a sequence file
    CompressBwt { file: String },
    /// Decompress a compressed file
    Decompress { file: String },
    /// Decompress a transformed-and-compressed file, then undo the transform
    DecompressInvert { file: String },
}

impl Args {
    /// Turn parsed arguments into options.
    pub fn into_opts(self) -> Result<SeqOpts> {
        let (op_mode, file) = match self.command {
            Command::Transform { file } => (Mode::Transform, file),
            Command::Invert { file } => (Mode::Invert, file),
            Command::Compress { file } => (Mode::Compress, file),
            Command::CompressBwt { file } => (Mode::CompressBwt, file),
            Command::Decompress { file } => (Mode::Decompress, file),
            Command::DecompressInvert { file } => (Mode::DecompressInvert, file),
        };
        Ok(SeqOpts {
            alphabet: Alphabet::new(&self.alphabet)?,
            inverse: self.inverse,
            op_mode,
            file: Some(file),
            force_overwrite: self.force,
            show: self.show,
            verbose: Verbosity::from_count(self.verbose),
        })
    }
}

/// Parse the process arguments. Exits with usage information on bad arguments.
pub fn seqopts_init() -> Result<SeqOpts> {
    Args::parse().into_opts()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::SeqError;
    use clap::CommandFactory;

    fn opts(args: &[&str]) -> SeqOpts {
        Args::try_parse_from(args).unwrap().into_opts().unwrap()
    }

    #[test]
    fn parser_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbosity_flag_counts() {
        assert_eq!(opts(&["seqzip", "transform", "x"]).verbose, Verbosity::Errors);
        assert_eq!(opts(&["seqzip", "-v", "transform", "x"]).verbose, Verbosity::Warnings);
        assert_eq!(opts(&["seqzip", "transform", "-vvvvvv", "x"]).verbose, Verbosity::Trace);
    }

    #[test]
    fn subcommands() {
        let o = opts(&["seqzip", "compress-bwt", "reads.txt"]);
        assert_eq!(o.op_mode, Mode::CompressBwt);
        assert_eq!(o.file.as_deref(), Some("reads.txt"));
        assert_eq!(o.inverse, InverseAlgorithm::ColumnSort);
        assert_eq!(o.verbose, Verbosity::Errors);

        let o = opts(&["seqzip", "decompress-invert", "x_bwt_compressed.txt"]);
        assert_eq!(o.op_mode, Mode::DecompressInvert);
    }

    #[test]
    fn global_flags() {
        let o = opts(&[
            "seqzip",
            "-vvv",
            "invert",
            "--inverse",
            "last-to-first",
            "--alphabet",
            "acgu",
            "-f",
            "--show",
            "x.txt",
        ]);
        assert_eq!(o.op_mode, Mode::Invert);
        assert_eq!(o.inverse, InverseAlgorithm::LastToFirst);
        assert_eq!(o.alphabet.symbols(), b"ACGU");
        assert_eq!(o.verbose, Verbosity::Debug);
        assert!(o.force_overwrite);
        assert!(o.show);
    }

    #[test]
    fn bad_alphabet() {
        let args = Args::try_parse_from(["seqzip", "--alphabet", "AC$", "compress", "x"]).unwrap();
        assert!(matches!(args.into_opts(), Err(SeqError::InvalidAlphabetConfig(_))));
    }

    #[test]
    fn missing_file() {
        assert!(Args::try_parse_from(["seqzip", "compress"]).is_err());
    }
}
