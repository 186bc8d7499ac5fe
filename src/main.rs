//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::path::Path;
use std::process::exit;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use seqzip::compression::compress::{compress_report, compress_transformed_report};
use seqzip::compression::decompress::decompress_report;
use seqzip::compression::transform::{transform_forward, transform_inverse};
use seqzip::huffman_coding::code_table::render_bits;
use seqzip::tools::cli::seqopts_init;
use seqzip::tools::files::{output_path, read_artifact, read_text, write_artifact, write_text};
use seqzip::tools::options::{Mode, SeqOpts};
use seqzip::tools::report::report;
use seqzip::{Result, SeqError};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let options = match seqopts_init() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            exit(2);
        }
    };

    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        options.verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        log::set_max_level(LevelFilter::Error);
    }

    // Run the requested operation
    match run(&options) {
        Ok(()) => info!("Done.\n"),
        Err(e) => {
            error!("{}", e);
            eprintln!("seqzip: {}", e);
            exit(1);
        }
    }
}

/// Run the operation in `opts` on its input file and write the result next to it.
fn run(opts: &SeqOpts) -> Result<()> {
    let input = opts.file.as_deref().ok_or(SeqError::EmptyInput)?;
    let input = Path::new(input);
    let output = output_path(input, opts.op_mode);
    info!("{} {} -> {}", opts.op_mode, input.display(), output.display());

    match opts.op_mode {
        Mode::Transform => {
            let t = transform_forward(&read_text(input)?, opts)?;
            write_text(&output, &t.bwt, opts.force_overwrite)?;
            report(opts, "Original sequence", &t.sequence);
            report(opts, "Bwt sequence", &t.bwt);
        }
        Mode::Invert => {
            let bwt = read_text(input)?;
            let original = transform_inverse(&bwt, opts)?;
            write_text(&output, &original, opts.force_overwrite)?;
            report(opts, "Bwt sequence", bwt.trim());
            report(opts, "Original sequence", &original);
        }
        Mode::Compress | Mode::CompressBwt => {
            let raw = read_text(input)?;
            let (title, r) = if opts.op_mode == Mode::Compress {
                ("DNA sequence", compress_report(&raw, opts)?)
            } else {
                ("BWT sequence", compress_transformed_report(&raw, opts)?)
            };
            write_artifact(&output, &r.artifact, opts.force_overwrite)?;
            report(opts, title, &String::from_utf8_lossy(&r.coded));
            report(opts, "Binary sequence", &render_bits(&r.bits));
            report(opts, "Packed sequence", &packed_text(&r.artifact.packed));
        }
        Mode::Decompress | Mode::DecompressInvert => {
            let artifact = read_artifact(input)?;
            let r = decompress_report(&artifact)?;
            report(opts, "Packed sequence", &packed_text(&artifact.packed));
            report(opts, "Binary sequence", &render_bits(&r.bits));
            if opts.op_mode == Mode::Decompress {
                write_text(&output, &r.symbols, opts.force_overwrite)?;
                report(opts, "Decompressed sequence", &r.symbols);
            } else {
                let original = transform_inverse(&r.symbols, opts)?;
                write_text(&output, &original, opts.force_overwrite)?;
                report(opts, "Decompressed BWT sequence", &r.symbols);
                report(opts, "Original sequence", &original);
            }
        }
    }
    Ok(())
}

fn packed_text(packed: &[u8]) -> String {
    packed.iter().map(|&b| char::from(b)).collect()
}
